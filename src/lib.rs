//! Crossflow loads Miovision traffic-study spreadsheet exports into a
//! normalized relational schema.
//!
//! A load run recreates the schema from empty, seeds the three vocabulary
//! dimensions, then walks the corpus of study workbooks. Each workbook
//! contributes one study row plus a hierarchy of direction, movement, and
//! vehicle-class fact rows, committed per file so a bad file never poisons
//! the rest of the corpus.

pub mod config;
pub mod data;
pub mod discovery;
pub mod error;
pub mod ingest;
pub mod loader;
pub mod model;
pub mod startup;
