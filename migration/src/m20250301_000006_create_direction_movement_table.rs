use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000002_create_movement_type_table::MovementType,
    m20250301_000005_create_study_direction_table::StudyDirection,
};

static IDX_DIRECTION_MOVEMENT_STUDY_DIRECTION_ID: &str =
    "idx_directions_movements_study_direction_id";
static FK_DIRECTION_MOVEMENT_STUDY_DIRECTION_ID: &str =
    "fk_directions_movements_study_direction_id";
static FK_DIRECTION_MOVEMENT_MOVEMENT_TYPE_ID: &str = "fk_directions_movements_movement_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DirectionMovement::Table)
                    .if_not_exists()
                    .col(pk_auto(DirectionMovement::Id))
                    .col(integer(DirectionMovement::StudyDirectionId))
                    .col(integer(DirectionMovement::MovementTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DIRECTION_MOVEMENT_STUDY_DIRECTION_ID)
                            .from(DirectionMovement::Table, DirectionMovement::StudyDirectionId)
                            .to(StudyDirection::Table, StudyDirection::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DIRECTION_MOVEMENT_MOVEMENT_TYPE_ID)
                            .from(DirectionMovement::Table, DirectionMovement::MovementTypeId)
                            .to(MovementType::Table, MovementType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIRECTION_MOVEMENT_STUDY_DIRECTION_ID)
                    .table(DirectionMovement::Table)
                    .col(DirectionMovement::StudyDirectionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIRECTION_MOVEMENT_STUDY_DIRECTION_ID)
                    .table(DirectionMovement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DirectionMovement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DirectionMovement {
    #[sea_orm(iden = "directions_movements")]
    Table,
    Id,
    StudyDirectionId,
    MovementTypeId,
}
