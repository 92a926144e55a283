//! Responsive chart height.

use popstats_common::{ChartSettings, PopupConfig};

/// Chart height in the desktop popup.
pub const DEFAULT_CHART_HEIGHT: i32 = 218;

/// Chart height never drops below this.
pub const MIN_CHART_HEIGHT: i32 = 168;

/// Computes the chart height from the popup viewport height.
///
/// On mobile browsers the popup height is dynamic; the chart shrinks by as
/// many pixels as the popup is shorter than the baseline, down to the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightCalculator {
    design_height: i32,
    min_height: i32,
    baseline_height: i32,
}

impl HeightCalculator {
    pub fn new(design_height: i32, min_height: i32, baseline_height: i32) -> Self {
        Self {
            design_height,
            min_height,
            baseline_height,
        }
    }

    pub fn from_config(chart: &ChartSettings, popup: &PopupConfig) -> Self {
        Self::new(chart.design_height, chart.min_height, popup.baseline_height)
    }

    /// Chart height for a viewport of `viewport_height` pixels.
    pub fn chart_height(&self, viewport_height: i32) -> i32 {
        let shrink = self.baseline_height.saturating_sub(viewport_height);
        self.min_height
            .max(self.design_height.saturating_sub(shrink))
    }
}

impl Default for HeightCalculator {
    fn default() -> Self {
        Self::from_config(&ChartSettings::default(), &PopupConfig::default())
    }
}

/// Chart height with the default design and minimum heights.
pub fn calculate_chart_height(viewport_height: i32, baseline_height: i32) -> i32 {
    HeightCalculator::new(DEFAULT_CHART_HEIGHT, MIN_CHART_HEIGHT, baseline_height)
        .chart_height(viewport_height)
}
