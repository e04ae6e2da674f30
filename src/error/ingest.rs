use chrono::NaiveDateTime;
use thiserror::Error;

/// File-scoped errors raised while reading one study workbook.
///
/// None of these abort a corpus load; the orchestrator records the failure
/// against the file and continues.
#[derive(Error, Debug)]
pub enum IngestError {
    /// File name does not split into exactly `<studyType>-<miovisionId>`.
    #[error("File name {0:?} is not in the expected <studyType>-<miovisionId> form")]
    MalformedFileName(String),
    /// A required label row is absent from the summary sheet, or its value
    /// cell is missing/unreadable.
    #[error("Summary sheet is missing required field {0:?}")]
    MissingSummaryField(&'static str),
    /// The combined "lat, long" value did not parse as two numbers.
    #[error("Failed to parse {0:?} as a \"latitude, longitude\" pair")]
    CoordinateParseError(String),
    /// An anchor label was not found in the first column of the volume grid.
    #[error("Anchor row {0:?} not found in volume breakdown sheet")]
    AnchorNotFound(&'static str),
    /// End Time is not strictly after Start Time; a non-positive study
    /// duration is never inserted.
    #[error("Study end time {end} is not after start time {start}")]
    InvalidStudyWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// The workbook does not contain an expected sheet.
    #[error("Workbook has no {0} sheet")]
    SheetNotFound(&'static str),
    /// The workbook could not be opened or read.
    #[error(transparent)]
    Workbook(#[from] calamine::XlsxError),
}
