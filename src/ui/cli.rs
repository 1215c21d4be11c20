// src/ui/cli.rs

use crate::engine::config::Backend;
use clap::Parser;
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
//
// Flags only configure where the conversion happens; the temperature and unit
// are always read interactively.
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Path to the SQLite database holding the conversion routine
    #[clap(short = 'd', long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Name of the stored conversion routine (default: Convert_Temperature)
    #[clap(short = 'p', long = "procedure", value_name = "NAME")]
    pub procedure: Option<String>,

    /// Where the conversion runs: database or local
    #[clap(short = 'b', long = "backend")]
    pub backend: Option<Backend>,

    /// Read settings from this file instead of the user config directory
    #[clap(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Create the database if needed, store the conversion routine, and exit
    #[clap(long)]
    pub install_procedure: bool,

    /// Print the resolved configuration as TOML and exit
    #[clap(long)]
    pub show_config: bool,
}
