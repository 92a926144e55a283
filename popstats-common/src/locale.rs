//! Localized day and month names for chart categories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message ids for weekday names, Monday first.
pub const WEEKDAY_MESSAGE_IDS: [&str; 7] = [
    "popup_statistics_week_days_mon",
    "popup_statistics_week_days_tue",
    "popup_statistics_week_days_wed",
    "popup_statistics_week_days_thu",
    "popup_statistics_week_days_fri",
    "popup_statistics_week_days_sat",
    "popup_statistics_week_days_sun",
];

/// Message ids for month names, January first.
pub const MONTH_MESSAGE_IDS: [&str; 12] = [
    "popup_statistics_months_jan",
    "popup_statistics_months_feb",
    "popup_statistics_months_mar",
    "popup_statistics_months_apr",
    "popup_statistics_months_may",
    "popup_statistics_months_jun",
    "popup_statistics_months_jul",
    "popup_statistics_months_aug",
    "popup_statistics_months_sep",
    "popup_statistics_months_oct",
    "popup_statistics_months_nov",
    "popup_statistics_months_dec",
];

const ENGLISH_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lookup of localized calendar names.
///
/// Unknown indices and missing translations resolve to an empty string.
pub trait Locale {
    /// Weekday name for `index` (0 = Monday).
    fn weekday_name(&self, index: usize) -> &str;

    /// Month name for `index` (0 = January).
    fn month_name(&self, index: usize) -> &str;
}

/// Flat message catalog keyed by message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Catalog with no messages at all.
    pub fn empty() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// English catalog for every calendar message id.
    pub fn english() -> Self {
        let messages = WEEKDAY_MESSAGE_IDS
            .iter()
            .zip(ENGLISH_WEEKDAYS)
            .chain(MONTH_MESSAGE_IDS.iter().zip(ENGLISH_MONTHS))
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        Self { messages }
    }

    /// Overlay `other` on top of this catalog.
    pub fn merged(mut self, other: &MessageCatalog) -> Self {
        self.messages
            .extend(other.messages.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Get a message by id, or an empty string when it is missing.
    pub fn get_message(&self, id: &str) -> &str {
        self.messages.get(id).map(String::as_str).unwrap_or("")
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale for MessageCatalog {
    fn weekday_name(&self, index: usize) -> &str {
        WEEKDAY_MESSAGE_IDS
            .get(index)
            .map(|id| self.get_message(id))
            .unwrap_or("")
    }

    fn month_name(&self, index: usize) -> &str {
        MONTH_MESSAGE_IDS
            .get(index)
            .map(|id| self.get_message(id))
            .unwrap_or("")
    }
}
