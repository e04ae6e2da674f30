use sea_orm::entity::prelude::*;

/// Links a study direction to one movement observed within it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "directions_movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub study_direction_id: i32,
    pub movement_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::study_direction::Entity",
        from = "Column::StudyDirectionId",
        to = "super::study_direction::Column::Id"
    )]
    StudyDirection,
    #[sea_orm(
        belongs_to = "super::movement_type::Entity",
        from = "Column::MovementTypeId",
        to = "super::movement_type::Column::Id"
    )]
    MovementType,
    #[sea_orm(has_many = "super::movement_vehicle_class::Entity")]
    MovementVehicleClass,
}

impl Related<super::study_direction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyDirection.def()
    }
}

impl Related<super::movement_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovementType.def()
    }
}

impl Related<super::movement_vehicle_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovementVehicleClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
