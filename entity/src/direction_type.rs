use sea_orm::entity::prelude::*;

/// Vocabulary dimension: compass-oriented approach legs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "direction_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub direction_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::study_direction::Entity")]
    StudyDirection,
}

impl Related<super::study_direction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyDirection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
