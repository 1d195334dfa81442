use sea_orm::{ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, DbErr, EntityTrait};
use tracing::debug;

use super::Catalog;
use crate::{
    entities::crew_member,
    error::{CatalogError, CatalogResult},
    models::{CrewKey, NewCrewMember},
};

const ENTITY: &str = "CrewMember";

impl Catalog {
    /// Links a worker to a movie. Both references and the pair's uniqueness
    /// are checked by the store as part of the one INSERT.
    pub async fn create_crew_member(&self, new: NewCrewMember) -> CatalogResult<crew_member::Model> {
        debug!(movie_id = %new.movie_id, worker_id = new.worker_id, role = %new.role, "creating crew member");
        new.into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| CatalogError::from_write(e, ENTITY))
    }

    pub async fn get_crew_member(&self, key: &CrewKey) -> CatalogResult<crew_member::Model> {
        crew_member::Entity::find_by_id(key.as_primary_key())
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(ENTITY, key))
    }

    pub async fn update_crew_role(
        &self,
        key: &CrewKey,
        role: impl Into<String>,
    ) -> CatalogResult<crew_member::Model> {
        let model = crew_member::ActiveModel {
            movie_id: Unchanged(key.movie_id.clone()),
            worker_id: Unchanged(key.worker_id),
            role: Set(role.into()),
        };

        match model.update(&self.db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(CatalogError::not_found(ENTITY, key)),
            Err(e) => Err(CatalogError::from_write(e, ENTITY)),
        }
    }

    pub async fn delete_crew_member(&self, key: &CrewKey) -> CatalogResult<()> {
        let res = crew_member::Entity::delete_by_id(key.as_primary_key()).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(CatalogError::not_found(ENTITY, key));
        }
        Ok(())
    }
}
