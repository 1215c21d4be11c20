use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::engine::config::{Backend, ConverterConfig, ConverterConfigBuilder};
use crate::engine::config_file::ConfigFile;
use crate::ui::cli::Cli;

/// Prefix of the environment variables that override the config file.
pub const ENV_PREFIX: &str = "TEMPCONV_";

/// Loads the config file named by `--config`, or the user-global one.
///
/// A missing file yields the defaults; nothing is ever written to disk.
pub fn load_config_file(args: &Cli) -> Result<ConfigFile> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match confy::get_configuration_file_path("tempconv", None) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("No user config directory, using defaults: {e}");
                return Ok(ConfigFile::default());
            }
        },
    };
    read_config_file(&path)
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.is_file() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Settings picked up from `TEMPCONV_*` variables.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvOverrides {
    pub backend: Option<Backend>,
    pub database: Option<String>,
    pub procedure: Option<String>,
}

impl EnvOverrides {
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut out = Self::default();
        for (key, value) in vars {
            let Some(key) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "DATABASE" => out.database = Some(value),
                "PROCEDURE" => out.procedure = Some(value),
                "BACKEND" => match Backend::from_str(&value, true) {
                    Ok(b) => out.backend = Some(b),
                    Err(_) => log::warn!("Ignoring {ENV_PREFIX}BACKEND={value}: unknown backend"),
                },
                _ => {}
            }
        }
        out
    }
}

/// Merges settings with precedence CLI > environment > config file > defaults.
pub fn build_config(
    args: &Cli,
    env: &EnvOverrides,
    cfg_file: &ConfigFile,
) -> Result<ConverterConfig> {
    let mut b = ConverterConfigBuilder::default();

    if let Some(backend) = args.backend.or(env.backend).or(cfg_file.backend) {
        b.backend(backend);
    }

    if let Some(db) = args.database.clone().or_else(|| env.database.as_ref().map(PathBuf::from)) {
        b.database(db);
    } else if let Some(db) = &cfg_file.database {
        b.database(db.clone());
    }

    if let Some(p) = args
        .procedure
        .clone()
        .or_else(|| env.procedure.clone())
        .or_else(|| cfg_file.procedure.clone())
    {
        b.procedure(p);
    }

    b.build().context("Failed to build configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::database::DEFAULT_PROCEDURE;
    use tempfile::tempdir;

    fn vars(pairs: &[(&str, &str)]) -> EnvOverrides {
        EnvOverrides::from_vars(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_env_overrides_are_parsed() {
        let env = vars(&[
            ("TEMPCONV_DATABASE", "/srv/db.sqlite"),
            ("TEMPCONV_BACKEND", "LOCAL"),
            ("TEMPCONV_PROCEDURE", ""),
            ("HOME", "/root"),
        ]);
        assert_eq!(env.database.as_deref(), Some("/srv/db.sqlite"));
        assert_eq!(env.backend, Some(Backend::Local));
        assert_eq!(env.procedure, None);
    }

    #[test]
    fn test_unknown_backend_is_ignored() {
        let env = vars(&[("TEMPCONV_BACKEND", "oracle")]);
        assert_eq!(env.backend, None);
    }

    #[test]
    fn test_cli_beats_env_beats_file() {
        let file = ConfigFile {
            backend: Some(Backend::Local),
            database: Some(PathBuf::from("/file.sqlite")),
            procedure: Some("FromFile".into()),
        };
        let env = vars(&[("TEMPCONV_DATABASE", "/env.sqlite")]);
        let args = Cli {
            procedure: Some("FromCli".into()),
            ..Cli::default()
        };

        let cfg = build_config(&args, &env, &file).unwrap();
        assert_eq!(cfg.backend, Backend::Local);
        assert_eq!(cfg.database, PathBuf::from("/env.sqlite"));
        assert_eq!(cfg.procedure, "FromCli");
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let cfg = build_config(&Cli::default(), &EnvOverrides::default(), &ConfigFile::default())
            .unwrap();
        assert_eq!(cfg.backend, Backend::Database);
        assert_eq!(cfg.procedure, DEFAULT_PROCEDURE);
    }

    #[test]
    fn test_missing_config_file_is_not_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tempconv/config.toml");
        let args = Cli {
            config: Some(path.clone()),
            ..Cli::default()
        };
        let cfg = load_config_file(&args).unwrap();
        assert!(cfg.backend.is_none() && cfg.database.is_none());
        assert!(!path.exists());
        assert!(!dir.path().join("tempconv").exists());
    }

    #[test]
    fn test_existing_config_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "procedure = \"Custom\"\nbackend = \"local\"\n").unwrap();
        let cfg = read_config_file(&path).unwrap();
        assert_eq!(cfg.procedure.as_deref(), Some("Custom"));
        assert_eq!(cfg.backend, Some(Backend::Local));
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend = [").unwrap();
        assert!(read_config_file(&path).is_err());
    }
}
