use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::config::Backend;

/// Represents the structure of the `config.toml` file.
/// All fields are optional, so users only need to specify what they want to override.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub backend: Option<Backend>,
    pub database: Option<PathBuf>,
    pub procedure: Option<String>,
}
