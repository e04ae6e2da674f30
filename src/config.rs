use std::path::PathBuf;

use crate::error::config::ConfigError;

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub study_data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            study_data_dir: PathBuf::from(require_var("STUDY_DATA_DIR")?),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name))
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        std::env::remove_var("DATABASE_URL");

        let error = Config::from_env().unwrap_err();

        assert!(matches!(error, ConfigError::MissingEnvVar("DATABASE_URL")));
        // And it aggregates into the run-level error for `?` in the entry point.
        assert!(matches!(Error::from(error), Error::ConfigError(_)));
    }
}
