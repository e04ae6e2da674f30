use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, data::vocabulary::VocabularyRepository, error::Error};

/// Connect to the target relational store.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Drop and recreate the full schema.
///
/// Safe to call repeatedly; each call leaves every relation empty. A failure
/// here is fatal to the run since no usable target schema exists.
pub async fn reset_schema(db: &DatabaseConnection) -> Result<(), Error> {
    Migrator::fresh(db).await?;

    Ok(())
}

/// Populate the three vocabulary dimension tables.
///
/// Must complete before any file-processing worker starts; the vocabulary
/// cache is fetched from these rows and never refreshed mid-run.
pub async fn seed_vocabularies(db: &DatabaseConnection) -> Result<(), Error> {
    VocabularyRepository::new(db).seed_all().await?;

    Ok(())
}
