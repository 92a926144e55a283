//! Command line interface.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};

use popstats_common::{
    CalendarAnchor, ExportType, PanelConfig, StatisticsSnapshot, TimeRange, export_to_dir,
    read_snapshot,
};

use crate::app::{ChartProps, StatsChart};
use crate::demo::{demo_snapshot, demo_snapshot_seeded};
use crate::pointer::PointerHub;
use crate::renderer::JsonRenderer;
use crate::view::categories::categories_lines_by_key;
use crate::view::formatting::format_count;

/// Popup statistics chart engine.
#[derive(Parser, Debug, Clone)]
#[command(name = "popstats", about = "Popup statistics chart engine", version)]
pub struct Cli {
    /// Path to configuration file (JSON5).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the chart configuration for a statistics snapshot.
    Render(RenderArgs),
    /// Print axis categories and gridlines for a time range.
    Categories(CategoriesArgs),
    /// Export user rules, allowlist or settings to a file.
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Statistics snapshot file (JSON or CBOR).
    #[arg(short, long, required_unless_present = "demo", conflicts_with = "demo")]
    pub snapshot: Option<PathBuf>,

    /// Use generated demo statistics.
    #[arg(long)]
    pub demo: bool,

    /// Seed for the demo statistics.
    #[arg(long, requires = "demo")]
    pub seed: Option<u64>,

    /// Time range: day, week, month or year.
    #[arg(short, long, default_value = "day")]
    pub range: String,

    /// Metric key to plot.
    #[arg(short, long, default_value = "totalBlocked")]
    pub metric: String,

    /// Small layout mode.
    #[arg(long)]
    pub small: bool,

    /// Viewport height reported by the host.
    #[arg(long)]
    pub viewport_height: Option<i32>,

    /// Local time to anchor categories at (e.g. 2024-03-04T17:00:00).
    #[arg(long)]
    pub at: Option<NaiveDateTime>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    /// Time range: day, week, month or year.
    pub range: String,

    /// Series length (defaults to the range's bucket count).
    #[arg(long)]
    pub len: Option<usize>,

    /// Local time to anchor categories at (e.g. 2024-03-04T17:00:00).
    #[arg(long)]
    pub at: Option<NaiveDateTime>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// What is exported: user_filter, allow_list or settings.
    #[arg(short, long)]
    pub kind: String,

    /// File holding the content to export.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory (overrides `export.output_dir`).
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// App version in the file name (overrides `export.app_version`).
    #[arg(long)]
    pub app_version: Option<String>,
}

impl Cli {
    /// Explicit config path, or the per-user default if that file exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| default_config_path().filter(|path| path.exists()))
    }
}

/// Per-user configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("popstats").join("popstats.json5"))
}

/// Run a command, writing its output to `out`.
pub fn run(command: Command, config: &PanelConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Render(args) => render(args, config, out),
        Command::Categories(args) => categories(args, config, out),
        Command::Export(args) => export(args, config, out),
    }
}

fn anchor_at(at: Option<NaiveDateTime>) -> CalendarAnchor {
    at.map(|at| CalendarAnchor::from_datetime(&at))
        .unwrap_or_else(CalendarAnchor::now)
}

fn render(args: RenderArgs, config: &PanelConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let range: TimeRange = args.range.parse()?;

    let snapshot = match (&args.snapshot, args.seed) {
        (Some(path), _) => read_snapshot(path)
            .with_context(|| format!("Failed to read snapshot '{}'", path.display()))?,
        (None, Some(seed)) => demo_snapshot_seeded(seed),
        (None, None) => demo_snapshot(),
    };
    if snapshot.is_empty() {
        tracing::warn!("Snapshot holds no buckets; the chart will be empty");
    }

    let props = ChartProps::new(snapshot, range, args.metric.as_str()).with_small(args.small);
    let renderer = JsonRenderer::new(&mut *out).pretty(args.pretty);

    let mut chart = StatsChart::new(renderer, config, props, PointerHub::new())
        .with_anchor(anchor_at(args.at));
    if let Some(viewport_height) = args.viewport_height {
        chart = chart.with_viewport_height(viewport_height);
    }
    chart.mount()?;

    let total: u64 = chart.build_config().series().iter().sum();
    tracing::info!(
        range = %range,
        metric = %args.metric,
        total = %format_count(total),
        height = chart.plot_height(),
        "Rendered chart"
    );
    Ok(())
}

/// Bucket count of a range key; unknown keys have none.
fn default_len(range_key: &str) -> usize {
    range_key
        .parse::<TimeRange>()
        .map(StatisticsSnapshot::expected_len)
        .unwrap_or(0)
}

fn categories(
    args: CategoriesArgs,
    config: &PanelConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let len = args.len.unwrap_or_else(|| default_len(&args.range));
    let lines = categories_lines_by_key(len, &args.range, &anchor_at(args.at), &config.catalog())?;

    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &lines)?;
    } else {
        serde_json::to_writer(&mut *out, &lines)?;
    }
    writeln!(out)?;
    Ok(())
}

fn export(args: ExportArgs, config: &PanelConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let kind: ExportType = args.kind.parse()?;
    let content = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read '{}'", args.input.display()))?;

    let dir = args.out_dir.unwrap_or_else(|| config.export.output_dir.clone());
    let version = args
        .app_version
        .unwrap_or_else(|| config.export.app_version.clone());

    let path = export_to_dir(&dir, kind, &version, &content, &Local::now().naive_local())?;
    tracing::info!(kind = %kind, path = %path.display(), "Exported");
    writeln!(out, "{}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "popstats", "render", "--demo", "--seed", "3", "-r", "week", "--small",
        ])
        .unwrap();

        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert!(args.demo);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.range, "week");
        assert_eq!(args.metric, "totalBlocked");
        assert!(args.small);
    }

    #[test]
    fn test_render_needs_a_source() {
        assert!(Cli::try_parse_from(["popstats", "render"]).is_err());
        assert!(
            Cli::try_parse_from(["popstats", "render", "--demo", "-s", "stats.json"]).is_err()
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["popstats", "categories", "day", "--config", "p.json5"]).unwrap();
        assert_eq!(cli.config_path(), Some(PathBuf::from("p.json5")));
    }

    #[test]
    fn test_default_len() {
        assert_eq!(default_len("day"), 24);
        assert_eq!(default_len("month"), 31);
        assert_eq!(default_len("eon"), 0);
    }
}
