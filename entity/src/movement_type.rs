use sea_orm::entity::prelude::*;

/// Vocabulary dimension: turning/through/pedestrian maneuvers.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movement_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movement_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::direction_movement::Entity")]
    DirectionMovement,
}

impl Related<super::direction_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectionMovement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
