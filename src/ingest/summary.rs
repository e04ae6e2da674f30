use chrono::NaiveDateTime;

use crate::{
    error::ingest::IngestError,
    ingest::{filename::StudyFileName, sheet::SheetGrid},
    model::study::StudyRecord,
};

static STUDY_NAME_LABEL: &str = "Study Name";
static PROJECT_LABEL: &str = "Project";
static START_TIME_LABEL: &str = "Start Time";
static END_TIME_LABEL: &str = "End Time";
static LOCATION_LABEL: &str = "Location";
static COORDINATES_LABEL: &str = "Latitude and Longitude";

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Extract one study record from a summary sheet.
///
/// The sheet is a two-column label/value layout; labels are matched exactly
/// in the first column, in any row order. Study id and type are not on the
/// sheet at all, they come from the file name.
pub fn extract_study(grid: &SheetGrid, file: &StudyFileName) -> Result<StudyRecord, IngestError> {
    let study_name = normalize_quotes(required_text(grid, STUDY_NAME_LABEL)?);
    let project_name = optional_text(grid, PROJECT_LABEL)?;

    let start = required_date_time(grid, START_TIME_LABEL)?;
    let end = required_date_time(grid, END_TIME_LABEL)?;
    let study_duration = duration_hours(start, end)?;

    // Location is a required row but its value may legitimately be blank.
    let location_row = label_row(grid, LOCATION_LABEL)?;
    let location_name = normalize_quotes(grid.text(location_row, 1).unwrap_or(""));

    let (latitude, longitude) = parse_coordinates(required_text(grid, COORDINATES_LABEL)?)?;

    Ok(StudyRecord {
        miovision_id: file.miovision_id,
        study_name,
        study_duration,
        study_type: file.study_type.clone(),
        location_name,
        latitude,
        longitude,
        project_name,
        study_date: start.date(),
    })
}

fn label_row(grid: &SheetGrid, label: &'static str) -> Result<usize, IngestError> {
    grid.find_label_row(label)
        .ok_or(IngestError::MissingSummaryField(label))
}

fn required_text<'a>(grid: &'a SheetGrid, label: &'static str) -> Result<&'a str, IngestError> {
    let row = label_row(grid, label)?;
    grid.text(row, 1)
        .ok_or(IngestError::MissingSummaryField(label))
}

fn optional_text(grid: &SheetGrid, label: &'static str) -> Result<Option<String>, IngestError> {
    let row = label_row(grid, label)?;
    Ok(grid.text(row, 1).map(|s| normalize_quotes(s)))
}

fn required_date_time(
    grid: &SheetGrid,
    label: &'static str,
) -> Result<NaiveDateTime, IngestError> {
    let row = label_row(grid, label)?;
    grid.date_time(row, 1)
        .ok_or(IngestError::MissingSummaryField(label))
}

fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> Result<f64, IngestError> {
    if end <= start {
        return Err(IngestError::InvalidStudyWindow { start, end });
    }

    Ok((end - start).num_seconds() as f64 / SECONDS_PER_HOUR)
}

fn parse_coordinates(raw: &str) -> Result<(f64, f64), IngestError> {
    let error = || IngestError::CoordinateParseError(raw.to_string());

    let (lat_part, long_part) = raw.split_once(',').ok_or_else(error)?;
    let latitude = lat_part.trim().parse().map_err(|_| error())?;
    let longitude = long_part.trim().parse().map_err(|_| error())?;

    Ok((latitude, longitude))
}

/// Single quotes are swapped for spaces, matching how historical loads
/// sanitized names before the store used parameterized statements.
fn normalize_quotes(value: &str) -> String {
    value.replace('\'', " ")
}
