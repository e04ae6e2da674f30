use crossflow::{
    config::Config, discovery, error::Error, loader::resolver::VocabularyCache,
    loader::StudyLoader, model::report::FileStatus, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(error) = run().await {
        tracing::error!(%error, "Load run aborted");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    startup::reset_schema(&db).await?;
    startup::seed_vocabularies(&db).await?;

    let files = discovery::discover_workbooks(&config.study_data_dir)?;
    tracing::info!(count = files.len(), dir = %config.study_data_dir.display(), "Discovered study workbooks");

    let vocab = VocabularyCache::fetch(&db).await?;
    let loader = StudyLoader::new(&db, &vocab);
    let report = loader.load_corpus(&files).await;

    for outcome in &report.outcomes {
        if let FileStatus::Skipped { reason } = &outcome.status {
            tracing::warn!(file = %outcome.path.display(), reason, "Study not loaded");
        }
    }
    tracing::info!(
        loaded = report.loaded_count(),
        skipped = report.skipped_count(),
        "Corpus load finished"
    );

    // Machine-readable manifest of the run for downstream tooling.
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
