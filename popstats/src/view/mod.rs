//! Chart views: series, categories, layout and tooltip of the statistics chart.

pub mod categories;
pub mod chart;
pub mod formatting;
pub mod layout;
pub mod series;
pub mod tooltip;
