//! Extraction of the plotted series from a statistics snapshot.

use popstats_common::{MetricType, StatisticsSnapshot, TimeRange};

/// Get one value per bucket of `range`, in storage order.
///
/// Buckets without the metric contribute zero.
pub fn select_series(
    snapshot: &StatisticsSnapshot,
    range: TimeRange,
    metric: &MetricType,
) -> Vec<u64> {
    snapshot
        .buckets(range)
        .iter()
        .map(|bucket| bucket.count(metric))
        .collect()
}

/// Same as [`select_series`], for a range given by key.
///
/// An unrecognized key yields an empty series rather than an error.
pub fn select_series_by_key(
    snapshot: &StatisticsSnapshot,
    range_key: &str,
    metric: &MetricType,
) -> Vec<u64> {
    range_key
        .parse::<TimeRange>()
        .map(|range| select_series(snapshot, range, metric))
        .unwrap_or_default()
}
