use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_create_direction_type_table::DirectionType,
    m20250301_000004_create_study_table::Study,
};

static IDX_STUDY_DIRECTION_MIOVISION_ID: &str = "idx_studies_directions_miovision_id";
static FK_STUDY_DIRECTION_MIOVISION_ID: &str = "fk_studies_directions_miovision_id";
static FK_STUDY_DIRECTION_DIRECTION_TYPE_ID: &str = "fk_studies_directions_direction_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the same migration runs on
        // SQLite, which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(StudyDirection::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyDirection::Id))
                    .col(integer(StudyDirection::MiovisionId))
                    .col(integer(StudyDirection::DirectionTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STUDY_DIRECTION_MIOVISION_ID)
                            .from(StudyDirection::Table, StudyDirection::MiovisionId)
                            .to(Study::Table, Study::MiovisionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STUDY_DIRECTION_DIRECTION_TYPE_ID)
                            .from(StudyDirection::Table, StudyDirection::DirectionTypeId)
                            .to(DirectionType::Table, DirectionType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDY_DIRECTION_MIOVISION_ID)
                    .table(StudyDirection::Table)
                    .col(StudyDirection::MiovisionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDY_DIRECTION_MIOVISION_ID)
                    .table(StudyDirection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudyDirection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudyDirection {
    #[sea_orm(iden = "studies_directions")]
    Table,
    Id,
    MiovisionId,
    DirectionTypeId,
}
