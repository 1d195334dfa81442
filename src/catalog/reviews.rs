use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::review,
    error::{CatalogError, CatalogResult},
    models::{NewReview, ReviewPatch},
};

const ENTITY: &str = "Review";

impl Catalog {
    pub async fn create_review(&self, new: NewReview) -> CatalogResult<review::Model> {
        debug!(review_id = new.id, movie_id = %new.movie_id, "creating review");
        new.into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| CatalogError::from_write(e, ENTITY))
    }

    pub async fn get_review(&self, id: i32) -> CatalogResult<review::Model> {
        review::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(ENTITY, id))
    }

    pub async fn update_review(&self, id: i32, patch: ReviewPatch) -> CatalogResult<review::Model> {
        if patch.is_empty() {
            return self.get_review(id).await;
        }

        match patch.into_active_model(id).update(&self.db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(CatalogError::not_found(ENTITY, id)),
            Err(e) => Err(CatalogError::from_write(e, ENTITY)),
        }
    }

    pub async fn delete_review(&self, id: i32) -> CatalogResult<()> {
        let res = review::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(CatalogError::not_found(ENTITY, id));
        }
        Ok(())
    }
}
