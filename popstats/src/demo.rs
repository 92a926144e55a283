//! Demo statistics generator.
//!
//! Produces plausible traffic counters for running the chart without a
//! background page: busier during the day, quieter on weekends.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use popstats_common::{
    BucketRecord, DAY_BUCKETS, MONTH_BUCKETS, StatisticsSnapshot, WEEK_BUCKETS, YEAR_BUCKETS,
};

use crate::mock::{TOTAL_BLOCKED, TOTAL_REQUESTS};

/// Share of requests that get blocked, as a range.
const BLOCK_RATIO: std::ops::Range<f64> = 0.08..0.35;

/// Generate a demo snapshot from the thread-local RNG.
pub fn demo_snapshot() -> StatisticsSnapshot {
    demo_snapshot_seeded(rand::rng().random())
}

/// Generate a reproducible demo snapshot.
pub fn demo_snapshot_seeded(seed: u64) -> StatisticsSnapshot {
    let mut rng = SmallRng::seed_from_u64(seed);

    let today = (0..DAY_BUCKETS)
        .map(|hour| {
            // Peak in the afternoon, near-idle at night.
            let activity = if (8..22).contains(&hour) { 1.0 } else { 0.15 };
            random_bucket(&mut rng, 400.0 * activity)
        })
        .collect();

    let last_week = (0..WEEK_BUCKETS)
        .map(|day| {
            let activity = if day >= 5 { 0.6 } else { 1.0 };
            random_bucket(&mut rng, 6_000.0 * activity)
        })
        .collect();

    let last_month = (0..MONTH_BUCKETS)
        .map(|_| random_bucket(&mut rng, 5_500.0))
        .collect();

    let last_year = (0..YEAR_BUCKETS)
        .map(|_| random_bucket(&mut rng, 160_000.0))
        .collect();

    StatisticsSnapshot {
        today,
        last_week,
        last_month,
        last_year,
    }
}

fn random_bucket(rng: &mut SmallRng, mean_requests: f64) -> BucketRecord {
    let requests = (mean_requests * rng.random_range(0.5..1.5)).round() as u64;
    let blocked = (requests as f64 * rng.random_range(BLOCK_RATIO)).round() as u64;

    BucketRecord::new()
        .with_count(TOTAL_REQUESTS, requests)
        .with_count(TOTAL_BLOCKED, blocked)
}
