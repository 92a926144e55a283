//! Mock statistics and a recording renderer for testing.
//!
//! Provides snapshots with predictable counters and a [`ChartRenderer`] that
//! records every call instead of drawing.

use std::cell::RefCell;
use std::rc::Rc;

use popstats_common::{
    BucketRecord, DAY_BUCKETS, MONTH_BUCKETS, Result, StatisticsSnapshot, WEEK_BUCKETS,
    YEAR_BUCKETS,
};

use crate::renderer::ChartRenderer;
use crate::view::chart::ChartConfig;

/// Metric key for all requests seen.
pub const TOTAL_REQUESTS: &str = "totalRequests";

/// Metric key for blocked requests.
pub const TOTAL_BLOCKED: &str = "totalBlocked";

/// Bucket whose blocked count is `blocked` and request count ten times that.
pub fn bucket(blocked: u64) -> BucketRecord {
    BucketRecord::new()
        .with_count(TOTAL_REQUESTS, blocked * 10)
        .with_count(TOTAL_BLOCKED, blocked)
}

/// Buckets counting up from zero.
pub fn buckets(len: usize) -> Vec<BucketRecord> {
    (0..len as u64).map(bucket).collect()
}

/// Snapshot with full-length sequences; bucket `i` blocked `i` requests.
pub fn snapshot() -> StatisticsSnapshot {
    StatisticsSnapshot {
        today: buckets(DAY_BUCKETS),
        last_week: buckets(WEEK_BUCKETS),
        last_month: buckets(MONTH_BUCKETS),
        last_year: buckets(YEAR_BUCKETS),
    }
}

/// A call received by [`RecordingRenderer`].
#[derive(Debug, Clone)]
pub enum RenderCall {
    Bind(String),
    Configure(ChartConfig),
    Destroy,
}

/// Renderer that records calls; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Rc<RefCell<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    /// Number of `configure` calls received.
    pub fn configure_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, RenderCall::Configure(_)))
            .count()
    }

    /// The most recent configuration.
    pub fn last_config(&self) -> Option<ChartConfig> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            RenderCall::Configure(config) => Some(config.clone()),
            _ => None,
        })
    }
}

impl ChartRenderer for RecordingRenderer {
    fn bind(&mut self, target: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(RenderCall::Bind(target.to_string()));
        Ok(())
    }

    fn configure(&mut self, config: ChartConfig) -> Result<()> {
        self.calls.borrow_mut().push(RenderCall::Configure(config));
        Ok(())
    }

    fn destroy(&mut self) {
        self.calls.borrow_mut().push(RenderCall::Destroy);
    }
}
