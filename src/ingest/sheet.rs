use chrono::NaiveDateTime;

static DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M",
];

/// A single spreadsheet cell, reduced to the shapes the parsers care about.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

static EMPTY: CellValue = CellValue::Empty;

/// A dense row-major view of one sheet.
///
/// All addressing is zero-based. Reads outside the populated area resolve
/// to [`CellValue::Empty`] rather than panicking; source sheets have ragged
/// rows and the parsers locate structure by anchor label, not coordinate.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }

    /// Trimmed text content of a cell; `None` for blank or non-text cells.
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        match self.cell(row, col) {
            CellValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// Numeric content of a cell, accepting numeric text.
    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        match self.cell(row, col) {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Date-time content of a cell, accepting the handful of textual
    /// formats observed across source files.
    pub fn date_time(&self, row: usize, col: usize) -> Option<NaiveDateTime> {
        match self.cell(row, col) {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            }
            _ => None,
        }
    }

    /// Row index of the first cell in the label column exactly matching
    /// `label`.
    pub fn find_label_row(&self, label: &str) -> Option<usize> {
        (0..self.height()).find(|&row| self.text(row, 0) == Some(label))
    }
}
