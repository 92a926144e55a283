//! Statistics chart orchestrator.
//!
//! [`StatsChart`] owns one rendered chart instance. Every change to its
//! inputs reruns the full pipeline (series, categories, height, options) and
//! hands the result to the [`ChartRenderer`].

use std::cell::Cell;
use std::rc::Rc;

use popstats_common::{
    CalendarAnchor, ChartSettings, MessageCatalog, MetricType, PanelConfig, PopupConfig, Result,
    StatisticsSnapshot, TimeRange,
};

use crate::message::Message;
use crate::pointer::{PointerHub, PointerSubscription};
use crate::renderer::ChartRenderer;
use crate::view::categories::categories_lines;
use crate::view::chart::{ChartConfig, ChartInput};
use crate::view::layout::HeightCalculator;
use crate::view::series::select_series;
use crate::view::tooltip::TooltipPositioner;

/// Inputs the host passes to the chart.
#[derive(Debug, Clone, Default)]
pub struct ChartProps {
    /// Statistics to plot.
    pub snapshot: StatisticsSnapshot,
    /// Selected time range.
    pub range: TimeRange,
    /// Selected metric.
    pub metric: MetricType,
    /// Small layout mode.
    pub small: bool,
    /// Running in a host whose popup height changes (mobile browsers).
    pub alternate_host: bool,
}

impl ChartProps {
    pub fn new(
        snapshot: StatisticsSnapshot,
        range: TimeRange,
        metric: impl Into<MetricType>,
    ) -> Self {
        Self {
            snapshot,
            range,
            metric: metric.into(),
            small: false,
            alternate_host: false,
        }
    }

    pub fn with_small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    pub fn with_alternate_host(mut self, alternate_host: bool) -> Self {
        self.alternate_host = alternate_host;
        self
    }
}

/// Where the calendar anchor for category labels comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorSource {
    /// Read the local clock on every configuration.
    #[default]
    System,
    /// Always use this anchor.
    Fixed(CalendarAnchor),
}

impl AnchorSource {
    pub fn anchor(&self) -> CalendarAnchor {
        match self {
            AnchorSource::System => CalendarAnchor::now(),
            AnchorSource::Fixed(anchor) => *anchor,
        }
    }
}

/// One statistics chart instance.
pub struct StatsChart<R: ChartRenderer> {
    renderer: R,
    props: ChartProps,
    settings: ChartSettings,
    popup: PopupConfig,
    heights: HeightCalculator,
    catalog: MessageCatalog,
    anchor: AnchorSource,
    /// Height before small-mode adjustment.
    chart_height: i32,
    pointer_hub: PointerHub,
    /// Last pointer Y seen; survives reconfiguration.
    pointer_y: Rc<Cell<f64>>,
    pointer_subscription: Option<PointerSubscription>,
    mounted: bool,
}

impl<R: ChartRenderer> StatsChart<R> {
    /// Create a chart; nothing is rendered until [`mount`](Self::mount).
    pub fn new(
        renderer: R,
        config: &PanelConfig,
        props: ChartProps,
        pointer_hub: PointerHub,
    ) -> Self {
        let heights = HeightCalculator::from_config(&config.chart, &config.popup);
        let chart_height = heights.chart_height(config.popup.viewport_height);

        Self {
            renderer,
            props,
            settings: config.chart.clone(),
            popup: config.popup,
            heights,
            catalog: config.catalog(),
            anchor: AnchorSource::default(),
            chart_height,
            pointer_hub,
            pointer_y: Rc::new(Cell::new(0.0)),
            pointer_subscription: None,
            mounted: false,
        }
    }

    /// Pin the calendar anchor instead of reading the clock.
    pub fn with_anchor(mut self, anchor: CalendarAnchor) -> Self {
        self.anchor = AnchorSource::Fixed(anchor);
        self
    }

    /// Start from a known viewport height instead of the configured default.
    pub fn with_viewport_height(mut self, viewport_height: i32) -> Self {
        self.chart_height = self.heights.chart_height(viewport_height);
        self
    }

    /// Bind the renderer and draw the first chart.
    pub fn mount(&mut self) -> Result<()> {
        self.renderer.bind(&self.settings.bind_to)?;
        self.mounted = true;
        tracing::debug!(bind_to = %self.settings.bind_to, "Chart mounted");
        self.configure()
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Result<()> {
        let changed = match message {
            Message::SnapshotLoaded(snapshot) => {
                let changed = snapshot != self.props.snapshot;
                self.props.snapshot = snapshot;
                changed
            }

            Message::SetRange(range) => replace(&mut self.props.range, range),

            Message::SetMetric(metric) => replace(&mut self.props.metric, metric),

            Message::SetSmallMode(small) => replace(&mut self.props.small, small),

            Message::SetAlternateHost(alternate_host) => {
                let was_observing = self.props.alternate_host;
                self.props.alternate_host = alternate_host;
                // Switching the observer off runs its cleanup.
                was_observing && !alternate_host && self.reset_height()
            }

            Message::PopupResized(viewport_height) => {
                if self.props.alternate_host {
                    let height = self.heights.chart_height(viewport_height);
                    replace(&mut self.chart_height, height)
                } else {
                    tracing::debug!(viewport_height, "Ignoring resize outside alternate host");
                    false
                }
            }

            Message::ResizeObserverCleanup => self.reset_height(),

            Message::Teardown => {
                self.teardown();
                false
            }
        };

        if changed && self.mounted {
            self.configure()?;
        }
        Ok(())
    }

    /// Rebuild the chart from the current inputs.
    ///
    /// Replaces the pointer listener of the previous configuration.
    pub fn configure(&mut self) -> Result<()> {
        drop(self.pointer_subscription.take());
        self.pointer_subscription = Some(self.pointer_hub.subscribe(Rc::clone(&self.pointer_y)));

        let config = self.build_config();
        tracing::debug!(
            range = %self.props.range,
            metric = %self.props.metric,
            buckets = config.series().len(),
            height = config.size.height,
            "Configuring chart"
        );
        self.renderer.configure(config)
    }

    /// The chart configuration for the current inputs.
    pub fn build_config(&self) -> ChartConfig {
        let series = select_series(&self.props.snapshot, self.props.range, &self.props.metric);
        let categories = categories_lines(
            series.len(),
            self.props.range,
            &self.anchor.anchor(),
            &self.catalog,
        );

        ChartConfig::build(ChartInput {
            bind_to: self.settings.bind_to.clone(),
            height: self.plot_height(),
            padding: self.settings.padding,
            series,
            categories,
            positioner: TooltipPositioner::new(
                Rc::clone(&self.pointer_y),
                self.settings.tooltip_offset,
            ),
        })
    }

    /// Responsive chart height, before the small-mode adjustment.
    pub fn chart_height(&self) -> i32 {
        self.chart_height
    }

    /// Height handed to the renderer.
    pub fn plot_height(&self) -> i32 {
        if self.props.small {
            self.chart_height - self.settings.small_mode_height_diff
        } else {
            self.chart_height
        }
    }

    /// Selector of the node the chart binds into.
    pub fn bind_target(&self) -> &str {
        &self.settings.bind_to
    }

    /// Last pointer Y coordinate observed.
    pub fn pointer_y(&self) -> f64 {
        self.pointer_y.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Recompute the height from the configured default viewport.
    fn reset_height(&mut self) -> bool {
        let height = self.heights.chart_height(self.popup.viewport_height);
        replace(&mut self.chart_height, height)
    }

    fn teardown(&mut self) {
        self.pointer_subscription = None;
        if self.mounted {
            self.mounted = false;
            self.renderer.destroy();
            tracing::debug!(bind_to = %self.settings.bind_to, "Chart torn down");
        }
    }
}

impl<R: ChartRenderer> Drop for StatsChart<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Store `value` in `slot`, returning whether it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
