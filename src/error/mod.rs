//! Error types for the crossflow ingestion pipeline.
//!
//! Domain-specific errors (`ConfigError`, `IngestError`) are aggregated into
//! a single top-level [`Error`] via `thiserror`'s `#[from]` conversions.
//! Errors raised while processing one workbook are file-scoped: the load
//! orchestrator reports them and moves on to the next file. Only schema
//! reset and store-connectivity failures abort a run.

pub mod config;
pub mod ingest;

use thiserror::Error;

use crate::error::{config::ConfigError, ingest::IngestError};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// File-scoped ingestion error (file name, summary sheet, or volume grid).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Filesystem error while discovering study workbooks.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Failed to serialize the load report.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Internal error indicating a bug in crossflow's code.
    #[error("Internal error with crossflow's code, this indicates a bug: {0}")]
    InternalError(String),
}
