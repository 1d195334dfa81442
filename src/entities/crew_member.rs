use sea_orm::entity::prelude::*;

/// Join row between a movie and a worker. The `(movie_id, worker_id)` pair is
/// the primary key, so a worker holds at most one role per movie.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "CrewMember")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "movieId")]
    pub movie_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "workerId")]
    pub worker_id: i32,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::worker::Entity",
        from = "Column::WorkerId",
        to = "super::worker::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Worker,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::worker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
