use std::path::PathBuf;

use serde::Serialize;

/// Outcome of a corpus load: one status per source file.
///
/// Serializable so a run can emit a machine-readable manifest of what was
/// loaded and what was skipped.
#[derive(Debug, Default, Serialize)]
pub struct LoadReport {
    pub outcomes: Vec<FileOutcome>,
}

impl LoadReport {
    pub fn loaded_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Loaded { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.loaded_count()
    }
}

#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Loaded { miovision_id: i32 },
    Skipped { reason: String },
}
