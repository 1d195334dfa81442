//! Data-access layer over the catalog tables.
//!
//! Unique and foreign key rules live in the schema. Operations here issue a
//! single statement, or a single transaction when several rows change
//! together, and translate constraint failures into [`CatalogError`] kinds.
//!
//! [`CatalogError`]: crate::error::CatalogError

mod crew;
mod movies;
mod reviews;
mod workers;

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    config::DeletePolicy,
    entities::{crew_member, movie, review, worker},
    error::CatalogResult,
    models::CatalogStats,
};

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
    delete_policy: DeletePolicy,
}

impl Catalog {
    pub fn new(db: DatabaseConnection, delete_policy: DeletePolicy) -> Self {
        Self { db, delete_policy }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    pub async fn stats(&self) -> CatalogResult<CatalogStats> {
        Ok(CatalogStats {
            movies: movie::Entity::find().count(&self.db).await?,
            reviews: review::Entity::find().count(&self.db).await?,
            workers: worker::Entity::find().count(&self.db).await?,
            crew_members: crew_member::Entity::find().count(&self.db).await?,
        })
    }
}
