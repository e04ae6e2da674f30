use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::model::study::StudyRecord;

pub struct StudyRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: &StudyRecord) -> Result<entity::study::Model, DbErr> {
        let study = entity::study::ActiveModel {
            miovision_id: ActiveValue::Set(record.miovision_id),
            study_name: ActiveValue::Set(record.study_name.clone()),
            study_duration: ActiveValue::Set(record.study_duration),
            study_type: ActiveValue::Set(record.study_type.clone()),
            location_name: ActiveValue::Set(record.location_name.clone()),
            latitude: ActiveValue::Set(record.latitude),
            longitude: ActiveValue::Set(record.longitude),
            project_name: ActiveValue::Set(record.project_name.clone()),
            study_date: ActiveValue::Set(record.study_date),
        };

        study.insert(self.db).await
    }
}
