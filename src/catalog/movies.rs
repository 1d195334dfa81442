use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::debug;

use super::Catalog;
use crate::{
    config::DeletePolicy,
    entities::{crew_member, movie, review, worker},
    error::{CatalogError, CatalogResult},
    models::{CrewCredit, MoviePatch, NewMovie},
};

const ENTITY: &str = "Movie";

impl Catalog {
    pub async fn create_movie(&self, new: NewMovie) -> CatalogResult<movie::Model> {
        debug!(movie_id = %new.id, title = %new.title, "creating movie");
        new.into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| CatalogError::from_write(e, ENTITY))
    }

    pub async fn get_movie(&self, id: &str) -> CatalogResult<movie::Model> {
        movie::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(ENTITY, id))
    }

    pub async fn get_movie_by_title(&self, title: &str) -> CatalogResult<movie::Model> {
        movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(ENTITY, format!("titled {title:?}")))
    }

    pub async fn update_movie(&self, id: &str, patch: MoviePatch) -> CatalogResult<movie::Model> {
        if patch.is_empty() {
            return self.get_movie(id).await;
        }

        debug!(movie_id = %id, "updating movie");
        match patch.into_active_model(id).update(&self.db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(CatalogError::not_found(ENTITY, id)),
            Err(e) => Err(CatalogError::from_write(e, ENTITY)),
        }
    }

    /// Deletes a movie according to the catalog's [`DeletePolicy`].
    pub async fn delete_movie(&self, id: &str) -> CatalogResult<()> {
        match self.delete_policy {
            DeletePolicy::Restrict => {
                let res = movie::Entity::delete_by_id(id.to_string())
                    .exec(&self.db)
                    .await
                    .map_err(|e| CatalogError::from_delete(e, ENTITY, id))?;
                if res.rows_affected == 0 {
                    return Err(CatalogError::not_found(ENTITY, id));
                }
            },
            DeletePolicy::Cascade => {
                let txn = self.db.begin().await?;

                let reviews = review::Entity::delete_many()
                    .filter(review::Column::MovieId.eq(id))
                    .exec(&txn)
                    .await?;

                let crew = crew_member::Entity::delete_many()
                    .filter(crew_member::Column::MovieId.eq(id))
                    .exec(&txn)
                    .await?;

                let res = movie::Entity::delete_by_id(id.to_string())
                    .exec(&txn)
                    .await
                    .map_err(|e| CatalogError::from_delete(e, ENTITY, id))?;
                if res.rows_affected == 0 {
                    // Dropping the transaction rolls it back.
                    return Err(CatalogError::not_found(ENTITY, id));
                }

                txn.commit().await?;

                debug!(
                    movie_id = %id,
                    reviews = reviews.rows_affected,
                    crew = crew.rows_affected,
                    "cascaded movie delete"
                );
            },
        }

        Ok(())
    }

    pub async fn list_reviews_for_movie(&self, movie_id: &str) -> CatalogResult<Vec<review::Model>> {
        Ok(review::Entity::find()
            .filter(review::Column::MovieId.eq(movie_id))
            .order_by_asc(review::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn list_crew_for_movie(&self, movie_id: &str) -> CatalogResult<Vec<CrewCredit>> {
        let rows = crew_member::Entity::find()
            .filter(crew_member::Column::MovieId.eq(movie_id))
            .order_by_asc(crew_member::Column::WorkerId)
            .find_also_related(worker::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(crew, worker)| {
                worker.map(|worker| CrewCredit { movie_id: crew.movie_id, role: crew.role, worker })
            })
            .collect())
    }
}
