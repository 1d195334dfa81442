use std::fmt;

use sea_orm::ActiveValue::{self, NotSet, Set, Unchanged};

use crate::entities::{crew_member, movie, review, worker};

#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub poster: String,
    pub critic_rating: Option<f64>,
}

impl NewMovie {
    pub(crate) fn into_active_model(self) -> movie::ActiveModel {
        movie::ActiveModel {
            id: Set(self.id),
            title: Set(self.title),
            year: Set(self.year),
            genre: Set(self.genre),
            poster: Set(self.poster),
            critic_rating: Set(self.critic_rating),
        }
    }
}

/// Non-key movie attributes to change. `None` leaves a column alone;
/// `critic_rating: Some(None)` clears the rating.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub poster: Option<String>,
    pub critic_rating: Option<Option<f64>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.poster.is_none()
            && self.critic_rating.is_none()
    }

    pub(crate) fn into_active_model(self, id: &str) -> movie::ActiveModel {
        movie::ActiveModel {
            id: Unchanged(id.to_string()),
            title: set_if(self.title),
            year: set_if(self.year),
            genre: set_if(self.genre),
            poster: set_if(self.poster),
            critic_rating: set_if(self.critic_rating),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewReview {
    pub id: i32,
    pub movie_id: String,
    pub reviewer: String,
    pub rating: Option<i32>,
    pub link: String,
    pub text: String,
}

impl NewReview {
    pub(crate) fn into_active_model(self) -> review::ActiveModel {
        review::ActiveModel {
            id: Set(self.id),
            movie_id: Set(self.movie_id),
            reviewer: Set(self.reviewer),
            rating: Set(self.rating),
            link: Set(self.link),
            text: Set(self.text),
        }
    }
}

/// The owning movie is not patchable; move a review by deleting and
/// recreating it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewPatch {
    pub reviewer: Option<String>,
    pub rating: Option<Option<i32>>,
    pub link: Option<String>,
    pub text: Option<String>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        self.reviewer.is_none()
            && self.rating.is_none()
            && self.link.is_none()
            && self.text.is_none()
    }

    pub(crate) fn into_active_model(self, id: i32) -> review::ActiveModel {
        review::ActiveModel {
            id: Unchanged(id),
            movie_id: NotSet,
            reviewer: set_if(self.reviewer),
            rating: set_if(self.rating),
            link: set_if(self.link),
            text: set_if(self.text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWorker {
    pub name: String,
    pub link: String,
}

impl NewWorker {
    pub(crate) fn into_active_model(self) -> worker::ActiveModel {
        worker::ActiveModel {
            id: Default::default(),
            name: Set(self.name),
            link: Set(self.link),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerPatch {
    pub name: Option<String>,
    pub link: Option<String>,
}

impl WorkerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.link.is_none()
    }

    pub(crate) fn into_active_model(self, id: i32) -> worker::ActiveModel {
        worker::ActiveModel {
            id: Unchanged(id),
            name: set_if(self.name),
            link: set_if(self.link),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCrewMember {
    pub movie_id: String,
    pub worker_id: i32,
    pub role: String,
}

impl NewCrewMember {
    pub fn key(&self) -> CrewKey {
        CrewKey { movie_id: self.movie_id.clone(), worker_id: self.worker_id }
    }

    pub(crate) fn into_active_model(self) -> crew_member::ActiveModel {
        crew_member::ActiveModel {
            movie_id: Set(self.movie_id),
            worker_id: Set(self.worker_id),
            role: Set(self.role),
        }
    }
}

/// Composite identity of a crew row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CrewKey {
    pub movie_id: String,
    pub worker_id: i32,
}

impl CrewKey {
    pub fn new(movie_id: impl Into<String>, worker_id: i32) -> Self {
        Self { movie_id: movie_id.into(), worker_id }
    }

    pub(crate) fn as_primary_key(&self) -> (String, i32) {
        (self.movie_id.clone(), self.worker_id)
    }
}

impl fmt::Display for CrewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.movie_id, self.worker_id)
    }
}

/// A worker's credit on one movie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrewCredit {
    pub movie_id: String,
    pub role: String,
    pub worker: worker::Model,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub movies: u64,
    pub reviews: u64,
    pub workers: u64,
    pub crew_members: u64,
}

fn set_if<V>(value: Option<V>) -> ActiveValue<V>
where
    V: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}
