// src/engine/config.rs

use std::path::PathBuf;

use clap::ValueEnum;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::engine::database::{DEFAULT_PROCEDURE, SqliteConversionService};
use crate::engine::local::LocalConversionService;
use crate::engine::service::ConversionService;

/// Which implementation performs the conversion.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Call the routine stored in the SQLite database. (Default)
    #[default]
    Database,
    /// Compute the result in-process.
    Local,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Database => write!(f, "database"),
            Backend::Local => write!(f, "local"),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Builder, Serialize)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct ConverterConfig {
    #[builder(default)]
    pub backend: Backend,

    #[builder(default = "default_database_path()")]
    pub database: PathBuf,

    #[builder(default = "DEFAULT_PROCEDURE.to_string()")]
    pub procedure: String,
}

impl ConverterConfigBuilder {
    pub fn build(&self) -> Result<ConverterConfig, ConverterConfigBuilderError> {
        if let Some(procedure) = &self.procedure {
            if procedure.trim().is_empty() {
                return Err(ConverterConfigBuilderError::ValidationError(
                    "procedure name must not be empty".to_string(),
                ));
            }
        }
        self.build_internal()
    }
}

impl ConverterConfig {
    /// Builds the conversion service selected by `backend`.
    pub fn service(&self) -> Box<dyn ConversionService> {
        match self.backend {
            Backend::Database => Box::new(SqliteConversionService::new(
                self.database.clone(),
                self.procedure.clone(),
            )),
            Backend::Local => Box::new(LocalConversionService),
        }
    }
}

/// `<data dir>/tempconv/tempconv.sqlite`, falling back to the temp directory.
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tempconv")
        .join("tempconv.sqlite")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let cfg = ConverterConfigBuilder::default().build().unwrap();
        assert_eq!(cfg.backend, Backend::Database);
        assert_eq!(cfg.procedure, DEFAULT_PROCEDURE);
        assert!(cfg.database.ends_with("tempconv/tempconv.sqlite"));
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let cfg = ConverterConfigBuilder::default()
            .backend(Backend::Local)
            .database("/tmp/x.sqlite")
            .procedure("p")
            .build()
            .unwrap();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("backend = \"local\""));
        assert!(text.contains("procedure = \"p\""));
    }

    #[test]
    fn test_blank_procedure_is_rejected() {
        for name in ["", "   "] {
            let err = ConverterConfigBuilder::default()
                .procedure(name)
                .build()
                .unwrap_err();
            assert!(err.to_string().contains("procedure name must not be empty"));
        }
    }
}
