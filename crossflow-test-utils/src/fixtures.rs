use chrono::NaiveDate;
use sea_orm::ActiveValue;

/// A minimal valid study row for tests that only need a parent study.
pub fn study_active_model(miovision_id: i32) -> entity::study::ActiveModel {
    entity::study::ActiveModel {
        miovision_id: ActiveValue::Set(miovision_id),
        study_name: ActiveValue::Set("Fixture Study".to_string()),
        study_duration: ActiveValue::Set(2.0),
        study_type: ActiveValue::Set("TMC".to_string()),
        location_name: ActiveValue::Set("Fixture Rd".to_string()),
        latitude: ActiveValue::Set(53.5),
        longitude: ActiveValue::Set(-113.5),
        project_name: ActiveValue::Set(None),
        study_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
    }
}
