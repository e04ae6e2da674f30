use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};

use crate::{
    error::ingest::IngestError,
    ingest::sheet::{CellValue, SheetGrid},
};

static SUMMARY_SHEET: &str = "Summary";

/// The two sheets of one study export, converted to [`SheetGrid`]s.
pub struct StudyWorkbook {
    pub summary: SheetGrid,
    pub volume: SheetGrid,
}

/// Open a study workbook and pull out its summary and volume sheets.
///
/// The summary sheet is located by name (case-insensitive "Summary"); the
/// volume breakdown is the first remaining sheet, since its name varies
/// with the study type across source files.
pub fn open(path: &Path) -> Result<StudyWorkbook, IngestError> {
    let mut workbook: Xlsx<_> = calamine::open_workbook(path)?;

    let sheet_names = workbook.sheet_names();
    let summary_name = sheet_names
        .iter()
        .find(|name| name.eq_ignore_ascii_case(SUMMARY_SHEET))
        .cloned()
        .ok_or(IngestError::SheetNotFound("summary"))?;
    let volume_name = sheet_names
        .iter()
        .find(|name| **name != summary_name)
        .cloned()
        .ok_or(IngestError::SheetNotFound("volume breakdown"))?;

    let summary = grid_from_range(&workbook.worksheet_range(&summary_name)?);
    let volume = grid_from_range(&workbook.worksheet_range(&volume_name)?);

    Ok(StudyWorkbook { summary, volume })
}

fn grid_from_range(range: &Range<Data>) -> SheetGrid {
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    SheetGrid::new(rows)
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::Bool(_) | Data::DurationIso(_) | Data::Error(_) => CellValue::Empty,
    }
}
