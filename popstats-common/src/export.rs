//! Export of user rules, allowlist and settings to files.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Prefix shared by every exported file name.
pub const EXPORT_PRODUCT_PREFIX: &str = "adg_ext";

/// Timestamp layout used in exported file names (`ddMMyy-HHmmss`).
const EXPORT_TIME_FORMAT: &str = "%d%m%y-%H%M%S";

/// Kind of data being exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportType {
    /// User filtering rules.
    UserFilter,
    /// Allowlisted domains.
    AllowList,
    /// Full settings JSON.
    Settings,
}

impl ExportType {
    /// Base name of the exported file.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportType::UserFilter => "user_rules",
            ExportType::AllowList => "allowlist",
            ExportType::Settings => "settings",
        }
    }

    /// File extension of the exported file.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportType::UserFilter | ExportType::AllowList => "txt",
            ExportType::Settings => "json",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ExportType::UserFilter => "user_filter",
            ExportType::AllowList => "allow_list",
            ExportType::Settings => "settings",
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user_filter" => Ok(ExportType::UserFilter),
            "allow_list" => Ok(ExportType::AllowList),
            "settings" => Ok(ExportType::Settings),
            other => Err(Error::Config(format!("Unknown export type: {}", other))),
        }
    }
}

/// Build the file name for an export taken at `at`.
///
/// Layout: `adg_ext_{name}_{app_version}_{ddMMyy-HHmmss}.{ext}`.
pub fn exported_filename(kind: ExportType, app_version: &str, at: &NaiveDateTime) -> String {
    format!(
        "{}_{}_{}_{}.{}",
        EXPORT_PRODUCT_PREFIX,
        kind.file_name(),
        app_version,
        at.format(EXPORT_TIME_FORMAT),
        kind.extension()
    )
}

/// Write exported content into `dir` and return the created file's path.
pub fn export_to_dir(
    dir: impl AsRef<Path>,
    kind: ExportType,
    app_version: &str,
    content: &[u8],
    at: &NaiveDateTime,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let path = dir.join(exported_filename(kind, app_version, at));
    std::fs::write(&path, content)?;

    tracing::debug!(kind = %kind, path = %path.display(), bytes = content.len(), "Exported file");
    Ok(path)
}
