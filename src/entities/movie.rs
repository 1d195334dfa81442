use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Movie")]
pub struct Model {
    /// External catalog identifier, e.g. `tt0111161`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub poster: String,
    #[sea_orm(column_name = "criticRating", column_type = "Double", nullable)]
    pub critic_rating: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::crew_member::Entity")]
    CrewMember,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::crew_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrewMember.def()
    }
}

impl Related<super::worker::Entity> for Entity {
    fn to() -> RelationDef {
        super::crew_member::Relation::Worker.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::crew_member::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
