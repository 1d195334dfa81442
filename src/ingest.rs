//! Loading catalog entries together with their crew and reviews.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, TransactionTrait,
    sea_query::OnConflict,
};
use tracing::{debug, info, warn};

use crate::{
    catalog::Catalog,
    entities::{crew_member, movie, review, worker},
    error::{CatalogError, CatalogResult},
    models::{NewCrewMember, NewMovie, NewReview, NewWorker},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credit {
    pub name: String,
    pub role: String,
}

impl Credit {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self { name: name.into(), role: role.into() }
    }
}

#[derive(Clone, Debug)]
pub struct IngestReport {
    pub movie: movie::Model,
    pub crew: Vec<crew_member::Model>,
    /// Credits dropped because the worker already holds a role on this movie.
    pub skipped: Vec<Credit>,
}

impl Catalog {
    /// Returns the worker with `new.name`, creating it if absent. An existing
    /// worker keeps its link.
    pub async fn ensure_worker(&self, new: NewWorker) -> CatalogResult<worker::Model> {
        ensure_worker_on(self.db(), new).await
    }

    /// Inserts a review, or corrects reviewer, rating, link and text of the
    /// review already stored under the same id. The owning movie never changes.
    /// The write and the read of the stored row share one transaction.
    pub async fn upsert_review(&self, new: NewReview) -> CatalogResult<review::Model> {
        let id = new.id;
        debug!(review_id = id, movie_id = %new.movie_id, "upserting review");

        let txn = self.db().begin().await?;

        review::Entity::insert(new.into_active_model())
            .on_conflict(
                OnConflict::column(review::Column::Id)
                    .update_columns([
                        review::Column::Reviewer,
                        review::Column::Rating,
                        review::Column::Link,
                        review::Column::Text,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(|e| CatalogError::from_write(e, "Review"))?;

        let stored = review::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| CatalogError::not_found("Review", id))?;

        txn.commit().await?;
        Ok(stored)
    }

    /// Creates a movie and its crew in one transaction. Workers are matched
    /// by name and created when missing.
    pub async fn ingest_movie(
        &self,
        new: NewMovie,
        credits: &[Credit],
    ) -> CatalogResult<IngestReport> {
        let txn = self.db().begin().await?;

        let movie = new
            .into_active_model()
            .insert(&txn)
            .await
            .map_err(|e| CatalogError::from_write(e, "Movie"))?;

        let mut credited = HashSet::new();
        let mut crew = Vec::with_capacity(credits.len());
        let mut skipped = Vec::new();

        for credit in credits {
            let worker = ensure_worker_on(
                &txn,
                NewWorker { name: credit.name.clone(), link: wikipedia_link(&credit.name) },
            )
            .await?;

            if !credited.insert(worker.id) {
                warn!(
                    movie_id = %movie.id,
                    worker = %credit.name,
                    role = %credit.role,
                    "worker already credited on this movie, skipping role"
                );
                skipped.push(credit.clone());
                continue;
            }

            let row = NewCrewMember {
                movie_id: movie.id.clone(),
                worker_id: worker.id,
                role: credit.role.clone(),
            }
            .into_active_model()
            .insert(&txn)
            .await
            .map_err(|e| CatalogError::from_write(e, "CrewMember"))?;
            crew.push(row);
        }

        txn.commit().await?;

        info!(movie_id = %movie.id, crew = crew.len(), skipped = skipped.len(), "ingested movie");

        Ok(IngestReport { movie, crew, skipped })
    }
}

async fn ensure_worker_on<C>(conn: &C, new: NewWorker) -> CatalogResult<worker::Model>
where
    C: ConnectionTrait,
{
    let name = new.name.clone();

    worker::Entity::insert(new.into_active_model())
        .on_conflict(OnConflict::column(worker::Column::Name).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
        .map_err(|e| CatalogError::from_write(e, "Worker"))?;

    worker::Entity::find()
        .filter(worker::Column::Name.eq(name.as_str()))
        .one(conn)
        .await?
        .ok_or_else(|| CatalogError::not_found("Worker", format!("named {name:?}")))
}

/// Link stored for workers created during ingest. Only spaces are rewritten;
/// other characters are kept as typed.
pub fn wikipedia_link(name: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", name.trim().replace(' ', "_"))
}

pub fn split_credits(list: &str, role: &str) -> Vec<Credit> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "N/A")
        .map(|name| Credit::new(name, role))
        .collect()
}
