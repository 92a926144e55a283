//! popstats - Popup statistics chart engine.
//!
//! Turns per-bucket traffic counters into the series, axis categories,
//! gridlines and layout of the popup's statistics chart.

pub mod app;
pub mod cli;
pub mod demo;
pub mod message;
pub mod mock;
pub mod pointer;
pub mod renderer;
pub mod view;

// Re-export commonly used types
pub use app::{AnchorSource, ChartProps, StatsChart};
pub use message::Message;
pub use pointer::{PointerHub, PointerSubscription};
pub use renderer::{ChartRenderer, JsonRenderer};
