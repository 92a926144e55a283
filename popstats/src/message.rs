use popstats_common::{MetricType, StatisticsSnapshot, TimeRange};

/// Messages for the statistics chart.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new statistics snapshot arrived from the background page.
    SnapshotLoaded(StatisticsSnapshot),

    /// User selected a time range.
    SetRange(TimeRange),

    /// User selected a metric to chart.
    SetMetric(MetricType),

    /// Small layout mode toggled.
    SetSmallMode(bool),

    /// Host switched between the desktop popup and the alternate host
    /// (mobile browser) whose popup height is observed.
    SetAlternateHost(bool),

    /// The popup height observer reported a new viewport height.
    PopupResized(i32),

    /// The popup height observer was torn down.
    ResizeObserverCleanup,

    /// The chart is being unmounted.
    Teardown,
}
