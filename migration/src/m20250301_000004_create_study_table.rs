use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Study::Table)
                    .if_not_exists()
                    // External Miovision id parsed from the file name, never generated.
                    .col(integer(Study::MiovisionId).primary_key())
                    .col(string(Study::StudyName))
                    .col(double(Study::StudyDuration))
                    .col(string(Study::StudyType))
                    .col(string(Study::LocationName))
                    .col(double(Study::Latitude))
                    .col(double(Study::Longitude))
                    .col(string_null(Study::ProjectName))
                    .col(date(Study::StudyDate))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Study::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Study {
    #[sea_orm(iden = "studies")]
    Table,
    MiovisionId,
    StudyName,
    StudyDuration,
    StudyType,
    LocationName,
    Latitude,
    Longitude,
    ProjectName,
    StudyDate,
}
