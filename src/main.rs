use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<ExitCode> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = tempconv::ui::cli::Cli::parse();
    tempconv::app_controller::run(args)
}
