use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(string(Movie::Id).primary_key())
                    .col(string(Movie::Title))
                    .col(integer(Movie::Year))
                    .col(string(Movie::Genre))
                    .col(string(Movie::Poster))
                    .col(double_null(Movie::CriticRating))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("Movie_title_key")
                    .table(Movie::Table)
                    .col(Movie::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(integer(Review::Id).primary_key())
                    .col(string(Review::MovieId))
                    .col(string(Review::Reviewer))
                    .col(integer_null(Review::Rating))
                    .col(string(Review::Link))
                    .col(text(Review::Text))
                    .foreign_key(
                        ForeignKey::create()
                            .name("Review_movieId_fkey")
                            .from(Review::Table, Review::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Worker::Table)
                    .if_not_exists()
                    .col(pk_auto(Worker::Id))
                    .col(string(Worker::Name))
                    .col(string(Worker::Link))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("Worker_name_key")
                    .table(Worker::Table)
                    .col(Worker::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CrewMember::Table)
                    .if_not_exists()
                    .col(string(CrewMember::MovieId))
                    .col(integer(CrewMember::WorkerId))
                    .col(string(CrewMember::Role))
                    .primary_key(
                        Index::create()
                            .name("CrewMember_pkey")
                            .col(CrewMember::MovieId)
                            .col(CrewMember::WorkerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("CrewMember_movieId_fkey")
                            .from(CrewMember::Table, CrewMember::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("CrewMember_workerId_fkey")
                            .from(CrewMember::Table, CrewMember::WorkerId)
                            .to(Worker::Table, Worker::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CrewMember::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Worker::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    #[sea_orm(iden = "Movie")]
    Table,
    Id,
    Title,
    Year,
    Genre,
    Poster,
    #[sea_orm(iden = "criticRating")]
    CriticRating,
}

#[derive(DeriveIden)]
enum Review {
    #[sea_orm(iden = "Review")]
    Table,
    Id,
    #[sea_orm(iden = "movieId")]
    MovieId,
    Reviewer,
    Rating,
    Link,
    Text,
}

#[derive(DeriveIden)]
enum Worker {
    #[sea_orm(iden = "Worker")]
    Table,
    Id,
    Name,
    Link,
}

#[derive(DeriveIden)]
enum CrewMember {
    #[sea_orm(iden = "CrewMember")]
    Table,
    #[sea_orm(iden = "movieId")]
    MovieId,
    #[sea_orm(iden = "workerId")]
    WorkerId,
    Role,
}
