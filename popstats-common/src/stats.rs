use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::range::TimeRange;

/// Hourly buckets in `today`.
pub const DAY_BUCKETS: usize = 24;

/// Daily buckets in `lastWeek`.
pub const WEEK_BUCKETS: usize = 7;

/// Daily buckets in `lastMonth`.
pub const MONTH_BUCKETS: usize = 31;

/// Monthly buckets in `lastYear`.
pub const YEAR_BUCKETS: usize = 12;

/// Key of a counter inside a bucket record (e.g. "totalBlocked").
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricType(String);

impl MetricType {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MetricType {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for MetricType {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregated counters for one time bucket, keyed by metric type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketRecord(BTreeMap<String, u64>);

impl BucketRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a counter to this record.
    pub fn with_count(mut self, metric: impl Into<String>, count: u64) -> Self {
        self.0.insert(metric.into(), count);
        self
    }

    /// Get the count for a metric. Missing metrics count as zero.
    pub fn count(&self, metric: &MetricType) -> u64 {
        self.0.get(metric.as_str()).copied().unwrap_or(0)
    }
}

/// Statistics snapshot as delivered by the background page.
///
/// Each sequence is ordered oldest to newest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    /// 24 hourly buckets.
    #[serde(default)]
    pub today: Vec<BucketRecord>,

    /// 7 daily buckets.
    #[serde(default)]
    pub last_week: Vec<BucketRecord>,

    /// Daily buckets for the last month.
    #[serde(default)]
    pub last_month: Vec<BucketRecord>,

    /// 12 monthly buckets.
    #[serde(default)]
    pub last_year: Vec<BucketRecord>,
}

impl StatisticsSnapshot {
    /// Get the bucket sequence backing a time range.
    pub fn buckets(&self, range: TimeRange) -> &[BucketRecord] {
        match range {
            TimeRange::Day => &self.today,
            TimeRange::Week => &self.last_week,
            TimeRange::Month => &self.last_month,
            TimeRange::Year => &self.last_year,
        }
    }

    /// Bucket count a full sequence of `range` holds.
    pub fn expected_len(range: TimeRange) -> usize {
        match range {
            TimeRange::Day => DAY_BUCKETS,
            TimeRange::Week => WEEK_BUCKETS,
            TimeRange::Month => MONTH_BUCKETS,
            TimeRange::Year => YEAR_BUCKETS,
        }
    }

    /// True if no sequence holds any bucket.
    pub fn is_empty(&self) -> bool {
        TimeRange::all()
            .iter()
            .all(|range| self.buckets(*range).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metric_is_zero() {
        let record = BucketRecord::new().with_count("totalBlocked", 7);
        assert_eq!(record.count(&"totalBlocked".into()), 7);
        assert_eq!(record.count(&"totalRequests".into()), 0);
    }

    #[test]
    fn test_snapshot_wire_names() {
        let json = r#"{
            "today": [{"totalBlocked": 1}],
            "lastWeek": [{"totalBlocked": 2}],
            "lastMonth": [],
            "lastYear": [{"totalRequests": 3}]
        }"#;

        let snapshot: StatisticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.today.len(), 1);
        assert_eq!(snapshot.last_week[0].count(&"totalBlocked".into()), 2);
        assert!(snapshot.last_month.is_empty());
        assert_eq!(snapshot.buckets(TimeRange::Year).len(), 1);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_missing_sequences_default_empty() {
        let snapshot: StatisticsSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }
}
