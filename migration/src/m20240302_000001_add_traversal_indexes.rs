use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("Review_movieId_idx")
                    .table(Review::Table)
                    .col(Review::MovieId)
                    .to_owned(),
            )
            .await?;

        // CrewMember_pkey already leads with movieId.
        manager
            .create_index(
                Index::create()
                    .name("CrewMember_workerId_idx")
                    .table(CrewMember::Table)
                    .col(CrewMember::WorkerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop().name("CrewMember_workerId_idx").table(CrewMember::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("Review_movieId_idx").table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    #[sea_orm(iden = "Review")]
    Table,
    #[sea_orm(iden = "movieId")]
    MovieId,
}

#[derive(DeriveIden)]
enum CrewMember {
    #[sea_orm(iden = "CrewMember")]
    Table,
    #[sea_orm(iden = "workerId")]
    WorkerId,
}
