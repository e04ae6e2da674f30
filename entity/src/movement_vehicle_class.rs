use sea_orm::entity::prelude::*;

/// Leaf fact row: one vehicle-class count within a direction movement.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movement_vehicle_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub direction_movement_id: i32,
    pub vehicle_type_id: i32,
    pub vehicle_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::direction_movement::Entity",
        from = "Column::DirectionMovementId",
        to = "super::direction_movement::Column::Id"
    )]
    DirectionMovement,
    #[sea_orm(
        belongs_to = "super::vehicle_type::Entity",
        from = "Column::VehicleTypeId",
        to = "super::vehicle_type::Column::Id"
    )]
    VehicleType,
}

impl Related<super::direction_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectionMovement.def()
    }
}

impl Related<super::vehicle_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
