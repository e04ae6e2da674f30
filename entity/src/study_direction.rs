use sea_orm::entity::prelude::*;

/// Links a study to one direction observed in its volume grid.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "studies_directions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub miovision_id: i32,
    pub direction_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::study::Entity",
        from = "Column::MiovisionId",
        to = "super::study::Column::MiovisionId"
    )]
    Study,
    #[sea_orm(
        belongs_to = "super::direction_type::Entity",
        from = "Column::DirectionTypeId",
        to = "super::direction_type::Column::Id"
    )]
    DirectionType,
    #[sea_orm(has_many = "super::direction_movement::Entity")]
    DirectionMovement,
}

impl Related<super::study::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Study.def()
    }
}

impl Related<super::direction_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectionType.def()
    }
}

impl Related<super::direction_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DirectionMovement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
