//! Load orchestration: sequences extraction, parsing, and fact inserts
//! across the corpus with per-file commit boundaries.

pub mod resolver;

use std::path::{Path, PathBuf};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{
        direction_movement::DirectionMovementRepository,
        movement_vehicle_class::MovementVehicleClassRepository, study::StudyRepository,
        study_direction::StudyDirectionRepository,
    },
    error::Error,
    ingest::{filename, grid, summary, workbook},
    loader::resolver::VocabularyCache,
    model::{
        report::{FileOutcome, FileStatus, LoadReport},
        study::StudyRecord,
        volume::VolumeBreakdown,
    },
};

pub struct StudyLoader<'a> {
    db: &'a DatabaseConnection,
    vocab: &'a VocabularyCache,
}

impl<'a> StudyLoader<'a> {
    pub fn new(db: &'a DatabaseConnection, vocab: &'a VocabularyCache) -> Self {
        Self { db, vocab }
    }

    /// Load every workbook in the corpus, one commit per file.
    ///
    /// Every failure past this point is file-scoped by policy: the file's
    /// uncommitted work is rolled back, the failure is recorded against the
    /// file, and the walk continues. This includes store write failures such
    /// as a duplicate Miovision id; previously committed files stay intact.
    pub async fn load_corpus(&self, files: &[PathBuf]) -> LoadReport {
        let mut report = LoadReport::default();

        for path in files {
            let status = match self.load_file(path).await {
                Ok(miovision_id) => {
                    tracing::info!(file = %path.display(), miovision_id, "Loaded study");
                    FileStatus::Loaded { miovision_id }
                }
                Err(error) => {
                    tracing::warn!(file = %path.display(), %error, "Skipped study");
                    FileStatus::Skipped {
                        reason: error.to_string(),
                    }
                }
            };

            report.outcomes.push(FileOutcome {
                path: path.clone(),
                status,
            });
        }

        report
    }

    /// Extract, parse, and commit one study workbook.
    pub async fn load_file(&self, path: &Path) -> Result<i32, Error> {
        let file_name = filename::parse(path)?;
        let sheets = workbook::open(path)?;
        let record = summary::extract_study(&sheets.summary, &file_name)?;
        let breakdown = grid::parse_volume_grid(&sheets.volume)?;

        self.load_study(&record, &breakdown).await?;

        Ok(record.miovision_id)
    }

    /// Insert one study and its fact hierarchy as a single transaction.
    pub async fn load_study(
        &self,
        record: &StudyRecord,
        breakdown: &VolumeBreakdown,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        match self.insert_study(&txn, record, breakdown).await {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(error) => {
                txn.rollback().await.ok();
                Err(error)
            }
        }
    }

    async fn insert_study(
        &self,
        txn: &DatabaseTransaction,
        record: &StudyRecord,
        breakdown: &VolumeBreakdown,
    ) -> Result<(), Error> {
        StudyRepository::new(txn).create(record).await?;

        let direction_repo = StudyDirectionRepository::new(txn);
        let movement_repo = DirectionMovementRepository::new(txn);
        let vehicle_repo = MovementVehicleClassRepository::new(txn);

        for block in &breakdown.directions {
            let direction_type_id = self.vocab.direction_id(block.direction)?;
            let study_direction = direction_repo
                .create(record.miovision_id, direction_type_id)
                .await?;

            for column in &block.movements {
                let movement_type_id = self.vocab.movement_id(column.movement)?;
                let direction_movement = movement_repo
                    .create(study_direction.id, movement_type_id)
                    .await?;

                let counts = column
                    .counts
                    .iter()
                    .map(|&(vehicle, count)| Ok((self.vocab.vehicle_id(vehicle)?, count)))
                    .collect::<Result<Vec<_>, Error>>()?;

                vehicle_repo
                    .create_many(direction_movement.id, &counts)
                    .await?;
            }
        }

        Ok(())
    }
}
