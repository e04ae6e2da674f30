use sea_orm::entity::prelude::*;

/// Vocabulary dimension: vehicle/mode classification categories.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_type_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movement_vehicle_class::Entity")]
    MovementVehicleClass,
}

impl Related<super::movement_vehicle_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovementVehicleClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
