use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000003_create_vehicle_type_table::VehicleType,
    m20250301_000006_create_direction_movement_table::DirectionMovement,
};

static IDX_MOVEMENT_VEHICLE_CLASS_DIRECTION_MOVEMENT_ID: &str =
    "idx_movement_vehicle_classes_direction_movement_id";
static FK_MOVEMENT_VEHICLE_CLASS_DIRECTION_MOVEMENT_ID: &str =
    "fk_movement_vehicle_classes_direction_movement_id";
static FK_MOVEMENT_VEHICLE_CLASS_VEHICLE_TYPE_ID: &str =
    "fk_movement_vehicle_classes_vehicle_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovementVehicleClass::Table)
                    .if_not_exists()
                    .col(pk_auto(MovementVehicleClass::Id))
                    .col(integer(MovementVehicleClass::DirectionMovementId))
                    .col(integer(MovementVehicleClass::VehicleTypeId))
                    .col(integer(MovementVehicleClass::VehicleCount))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MOVEMENT_VEHICLE_CLASS_DIRECTION_MOVEMENT_ID)
                            .from(
                                MovementVehicleClass::Table,
                                MovementVehicleClass::DirectionMovementId,
                            )
                            .to(DirectionMovement::Table, DirectionMovement::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MOVEMENT_VEHICLE_CLASS_VEHICLE_TYPE_ID)
                            .from(
                                MovementVehicleClass::Table,
                                MovementVehicleClass::VehicleTypeId,
                            )
                            .to(VehicleType::Table, VehicleType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MOVEMENT_VEHICLE_CLASS_DIRECTION_MOVEMENT_ID)
                    .table(MovementVehicleClass::Table)
                    .col(MovementVehicleClass::DirectionMovementId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MOVEMENT_VEHICLE_CLASS_DIRECTION_MOVEMENT_ID)
                    .table(MovementVehicleClass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MovementVehicleClass::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MovementVehicleClass {
    #[sea_orm(iden = "movement_vehicle_classes")]
    Table,
    Id,
    DirectionMovementId,
    VehicleTypeId,
    VehicleCount,
}
