//! popstats - Popup statistics chart engine.
//!
//! Builds the statistics chart configuration from a snapshot, prints axis
//! categories for a time range, and exports rules or settings to files.

use clap::Parser;

use popstats::cli::{Cli, run};
use popstats_common::{PanelConfig, init_tracing, load_config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: PanelConfig = match cli.config_path() {
        Some(path) => load_config(&path)?,
        None => PanelConfig::default(),
    };
    config.validate()?;

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging)?;

    tracing::debug!(command = ?cli.command, "Starting popstats");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &config, &mut out)
}
