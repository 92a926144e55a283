//! popstats Common Library
//!
//! This crate provides the shared types and utilities of the popup statistics panel:
//!
//! - [`stats`] - Statistics data model (`StatisticsSnapshot`, `BucketRecord`, `MetricType`)
//! - [`range`] - Selectable time ranges
//! - [`calendar`] - Calendar anchor the chart categories are relative to
//! - [`locale`] - Localized weekday and month names
//! - [`serialization`] - JSON/CBOR encoding and decoding of snapshots
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`export`] - Settings export file naming and writing
//! - [`error`] - Error types

pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod locale;
pub mod range;
pub mod serialization;
pub mod stats;

// Re-export commonly used types at the crate root
pub use calendar::{CalendarAnchor, days_in_previous_month};
pub use config::{
    ChartSettings, ExportConfig, LogFormat, LoggingConfig, PanelConfig, PopupConfig, load_config,
    parse_config,
};
pub use error::{Error, Result};
pub use export::{ExportType, export_to_dir, exported_filename};
pub use locale::{Locale, MessageCatalog};
pub use range::TimeRange;
pub use serialization::{Format, decode, decode_auto, encode, read_snapshot};
pub use stats::{
    BucketRecord, DAY_BUCKETS, MONTH_BUCKETS, MetricType, StatisticsSnapshot, WEEK_BUCKETS,
    YEAR_BUCKETS,
};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// # Example
///
/// ```ignore
/// use popstats_common::{LoggingConfig, LogFormat, init_tracing};
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
