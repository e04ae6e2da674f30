use sea_orm::entity::prelude::*;

/// One traffic-volume survey event, keyed by the external Miovision id
/// parsed from the source file name (never store-generated).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "studies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub miovision_id: i32,
    pub study_name: String,
    pub study_duration: f64,
    pub study_type: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub project_name: Option<String>,
    pub study_date: Date,
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
