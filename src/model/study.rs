use chrono::NaiveDate;

/// Fully-derived metadata for one study, ready for insertion.
///
/// `miovision_id` and `study_type` come from the file name; everything else
/// is extracted from the workbook's summary sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyRecord {
    pub miovision_id: i32,
    pub study_name: String,
    pub study_duration: f64,
    pub study_type: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub project_name: Option<String>,
    pub study_date: NaiveDate,
}
