//! Spreadsheet ingestion: workbook access and the two sheet parsers.
//!
//! `workbook` converts calamine ranges into the crate-local [`sheet`] model
//! so `summary` and `grid` (and their tests) never touch spreadsheet-library
//! types directly.

pub mod filename;
pub mod grid;
pub mod sheet;
pub mod summary;
pub mod workbook;
