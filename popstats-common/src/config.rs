use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::locale::MessageCatalog;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Popup geometry reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Popup height on desktop browsers, the height the chart design targets.
    #[serde(default = "default_popup_height")]
    pub baseline_height: i32,

    /// Viewport height used until the host reports one.
    #[serde(default = "default_popup_height")]
    pub viewport_height: i32,
}

fn default_popup_height() -> i32 {
    600
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            baseline_height: default_popup_height(),
            viewport_height: default_popup_height(),
        }
    }
}

/// Chart layout constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Selector of the DOM node the chart binds into.
    #[serde(default = "default_bind_to")]
    pub bind_to: String,

    /// Chart height at the baseline popup height.
    #[serde(default = "default_design_height")]
    pub design_height: i32,

    /// Chart height never shrinks below this.
    #[serde(default = "default_min_height")]
    pub min_height: i32,

    /// Height removed in small layout mode (one action button).
    #[serde(default = "default_small_mode_height_diff")]
    pub small_mode_height_diff: i32,

    /// Horizontal padding on each side of the plot.
    #[serde(default = "default_padding")]
    pub padding: i32,

    /// Gap between the pointer and the bottom of the tooltip.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: f64,
}

fn default_bind_to() -> String {
    "#chart".to_string()
}

fn default_design_height() -> i32 {
    218
}

fn default_min_height() -> i32 {
    168
}

fn default_small_mode_height_diff() -> i32 {
    40
}

fn default_padding() -> i32 {
    15
}

fn default_tooltip_offset() -> f64 {
    10.0
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bind_to: default_bind_to(),
            design_height: default_design_height(),
            min_height: default_min_height(),
            small_mode_height_diff: default_small_mode_height_diff(),
            padding: default_padding(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

/// Settings export options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Version string embedded in exported file names.
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Directory exported files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            output_dir: default_output_dir(),
        }
    }
}

/// Top-level configuration for the statistics panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Popup geometry.
    #[serde(default)]
    pub popup: PopupConfig,

    /// Chart layout constants.
    #[serde(default)]
    pub chart: ChartSettings,

    /// Translation overrides, layered on top of the English catalog.
    #[serde(default = "MessageCatalog::empty")]
    pub locale: MessageCatalog,

    /// Settings export options.
    #[serde(default)]
    pub export: ExportConfig,
}

impl PanelConfig {
    /// Catalog with the configured translations applied over English.
    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::english().merged(&self.locale)
    }

    /// Check values that would make the layout math meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.chart.min_height <= 0 {
            return Err(Error::Config(format!(
                "chart.min_height must be positive, got {}",
                self.chart.min_height
            )));
        }
        if self.chart.design_height < self.chart.min_height {
            return Err(Error::Config(format!(
                "chart.design_height ({}) is below chart.min_height ({})",
                self.chart.design_height, self.chart.min_height
            )));
        }
        if self.popup.baseline_height <= 0 {
            return Err(Error::Config(format!(
                "popup.baseline_height must be positive, got {}",
                self.popup.baseline_height
            )));
        }
        Ok(())
    }
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_parse_panel_config() {
        let json5 = r##"
        {
            popup: {
                baseline_height: 580,
                viewport_height: 400,
            },
            chart: {
                bind_to: "#stats",
                tooltip_offset: 12,
            },
            logging: {
                level: "debug",
            },
        }
        "##;

        let config: PanelConfig = parse_config(json5).unwrap();

        assert_eq!(config.popup.baseline_height, 580);
        assert_eq!(config.popup.viewport_height, 400);
        assert_eq!(config.chart.bind_to, "#stats");
        assert_eq!(config.chart.tooltip_offset, 12.0);
        assert_eq!(config.chart.design_height, 218);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_default_config() {
        let config: PanelConfig = parse_config("{}").unwrap();

        assert_eq!(config.popup.baseline_height, 600);
        assert_eq!(config.chart.bind_to, "#chart");
        assert_eq!(config.chart.min_height, 168);
        assert_eq!(config.chart.small_mode_height_diff, 40);
        assert_eq!(config.chart.padding, 15);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.locale.messages.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_logging_format() {
        let json5 = r#"{ logging: { level: "debug", format: "json" } }"#;
        let config: PanelConfig = parse_config(json5).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_locale_overrides() {
        let json5 = r#"
        {
            locale: {
                messages: { popup_statistics_months_jan: "Jän" },
            },
        }
        "#;
        let config: PanelConfig = parse_config(json5).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.month_name(0), "Jän");
        assert_eq!(catalog.month_name(1), "Feb");
    }

    #[test]
    fn test_validate_rejects_inverted_heights() {
        let json5 = r#"{ chart: { design_height: 100, min_height: 168 } }"#;
        let config: PanelConfig = parse_config(json5).unwrap();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result: Result<PanelConfig> = load_config("/nonexistent/popstats.json5");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
