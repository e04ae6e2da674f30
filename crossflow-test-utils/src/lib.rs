//! Shared test infrastructure for crossflow.
//!
//! Provides an in-memory SQLite database with the schema derived from the
//! entity definitions, plus entity-level fixture factories.

pub mod error;
pub mod fixtures;
pub mod setup;
