//! Domain types shared across the ingestion pipeline.
//!
//! `vocab` holds the closed vocabulary enumerations, `study` the parsed
//! study metadata, `volume` the parsed breakdown-grid hierarchy, and
//! `report` the per-file outcome summary of a corpus load.

pub mod report;
pub mod study;
pub mod vocab;
pub mod volume;
