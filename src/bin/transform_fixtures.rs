//! Rewrites flat JSON exports in the fixtures directory as `{model, pk, fields}` records.

use apex_planner::{config, errors::Result, fixtures};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "transform-fixtures",
    about = "Reshape flat JSON exports into loadable fixture files"
)]
struct Cli {
    /// Path to the configuration file holding the file-to-model mapping
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Fixtures directory, overriding `fixtures.dir` from the configuration
    #[arg(long)]
    dir: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let app_config = config::load_app_configuration(&cli.config)?;
    let dir = cli.dir.unwrap_or(app_config.fixtures.dir);

    let report = fixtures::transform_all(&dir, &app_config.fixtures.files);
    info!(
        "{} files transformed, {} failed",
        report.transformed.len(),
        report.failed.len()
    );

    if report.failed.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        for (file, reason) in &report.failed {
            warn!("{}: {}", file, reason);
        }
        Ok(ExitCode::FAILURE)
    }
}
