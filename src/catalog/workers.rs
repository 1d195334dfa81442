use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::debug;

use super::Catalog;
use crate::{
    config::DeletePolicy,
    entities::{crew_member, movie, worker},
    error::{CatalogError, CatalogResult},
    models::{NewWorker, WorkerPatch},
};

const ENTITY: &str = "Worker";

impl Catalog {
    /// Inserts a worker; the id is assigned by the store.
    pub async fn create_worker(&self, new: NewWorker) -> CatalogResult<worker::Model> {
        debug!(name = %new.name, "creating worker");
        new.into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| CatalogError::from_write(e, ENTITY))
    }

    pub async fn get_worker(&self, id: i32) -> CatalogResult<worker::Model> {
        worker::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(ENTITY, id))
    }

    pub async fn get_worker_by_name(&self, name: &str) -> CatalogResult<worker::Model> {
        worker::Entity::find()
            .filter(worker::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(ENTITY, format!("named {name:?}")))
    }

    pub async fn update_worker(&self, id: i32, patch: WorkerPatch) -> CatalogResult<worker::Model> {
        if patch.is_empty() {
            return self.get_worker(id).await;
        }

        match patch.into_active_model(id).update(&self.db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(CatalogError::not_found(ENTITY, id)),
            Err(e) => Err(CatalogError::from_write(e, ENTITY)),
        }
    }

    /// Deletes a worker according to the catalog's [`DeletePolicy`]. Under
    /// `Cascade` the worker's crew rows go with it; the movies stay.
    pub async fn delete_worker(&self, id: i32) -> CatalogResult<()> {
        match self.delete_policy {
            DeletePolicy::Restrict => {
                let res = worker::Entity::delete_by_id(id)
                    .exec(&self.db)
                    .await
                    .map_err(|e| CatalogError::from_delete(e, ENTITY, id))?;
                if res.rows_affected == 0 {
                    return Err(CatalogError::not_found(ENTITY, id));
                }
            },
            DeletePolicy::Cascade => {
                let txn = self.db.begin().await?;

                let crew = crew_member::Entity::delete_many()
                    .filter(crew_member::Column::WorkerId.eq(id))
                    .exec(&txn)
                    .await?;

                let res = worker::Entity::delete_by_id(id)
                    .exec(&txn)
                    .await
                    .map_err(|e| CatalogError::from_delete(e, ENTITY, id))?;
                if res.rows_affected == 0 {
                    return Err(CatalogError::not_found(ENTITY, id));
                }

                txn.commit().await?;
                debug!(worker_id = id, crew = crew.rows_affected, "cascaded worker delete");
            },
        }

        Ok(())
    }

    pub async fn list_movies_for_worker(&self, worker_id: i32) -> CatalogResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .inner_join(crew_member::Entity)
            .filter(crew_member::Column::WorkerId.eq(worker_id))
            .order_by_asc(movie::Column::Year)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }
}
