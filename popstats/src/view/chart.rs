//! Chart configuration handed to the charting library.
//!
//! [`ChartConfig`] serializes to the option object of a c3-style area-spline
//! chart. The tooltip callbacks and the post-initialization hook cannot be
//! serialized; renderers call them through [`TooltipHooks`] and [`InitHook`].

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::BTreeMap;

use super::categories::{CategoriesLines, GridLine};
use super::formatting::tooltip_contents;
use super::tooltip::{Rect, TooltipPosition, TooltipPositioner};

/// Id of the single plotted series.
pub const SERIES_ID: &str = "data1";

/// Id of the fill gradient referenced by the series color.
pub const GRADIENT_ID: &str = "grad1";

/// Gradient definition injected into the chart's `<defs>` after init.
pub const GRADIENT_DEFS: &str = concat!(
    r#"<linearGradient id="grad1" x1="50%" y1="0%" x2="50%" y2="100%">"#,
    r#"  <stop offset="0%" style="stop-color:#73BE66;stop-opacity:1" />"#,
    r#"  <stop offset="23%" style="stop-color:#6DBE85;stop-opacity:1" />"#,
    r#"  <stop offset="100%" style="stop-color:#65BDA8;stop-opacity:1" />"#,
    "</linearGradient>",
);

/// Chart type of a data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    AreaSpline,
}

/// A named data column, serialized as `[name, v0, v1, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<u64>,
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.name)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SizeOptions {
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DataOptions {
    pub columns: Vec<Column>,
    pub types: BTreeMap<String, ChartKind>,
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PaddingOptions {
    pub left: i32,
    pub right: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TickOptions {
    pub outer: bool,
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct XAxisOptions {
    pub show: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub categories: Vec<String>,
    pub tick: TickOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AxisOptions {
    pub x: XAxisOptions,
    pub y: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GridLinesOptions {
    pub front: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GridXOptions {
    pub lines: Vec<GridLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GridOptions {
    pub lines: GridLinesOptions,
    pub x: GridXOptions,
    pub focus: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct InterpolationOptions {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SplineOptions {
    pub interpolation: InterpolationOptions,
}

/// Tooltip callbacks invoked by the charting library on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipHooks {
    positioner: TooltipPositioner,
}

impl TooltipHooks {
    pub fn new(positioner: TooltipPositioner) -> Self {
        Self { positioner }
    }

    /// Where to place a `width` x `height` tooltip for the hovered `element`.
    pub fn position(
        &self,
        element: &Rect,
        chart: Option<&Rect>,
        width: f64,
        height: f64,
    ) -> TooltipPosition {
        self.positioner.position(element, chart, width, height)
    }

    /// Tooltip markup for the hovered values.
    pub fn contents(&self, values: &[f64]) -> String {
        tooltip_contents(values)
    }
}

/// One-time hook run after the chart is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitHook {
    defs: &'static str,
}

impl InitHook {
    /// Append the gradient definition to the rendered `<defs>` markup.
    pub fn apply(&self, defs: &mut String) {
        defs.push_str(self.defs);
    }
}

impl Default for InitHook {
    fn default() -> Self {
        Self {
            defs: GRADIENT_DEFS,
        }
    }
}

/// Full configuration of one chart instance.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartConfig {
    pub bindto: String,
    pub size: SizeOptions,
    pub data: DataOptions,
    pub padding: PaddingOptions,
    pub axis: AxisOptions,
    pub legend: Toggle,
    pub grid: GridOptions,
    pub spline: SplineOptions,
    pub point: Toggle,
    #[serde(skip)]
    pub tooltip: TooltipHooks,
    #[serde(skip)]
    pub oninit: InitHook,
}

/// Inputs of [`ChartConfig::build`].
#[derive(Debug, Clone)]
pub struct ChartInput {
    /// Selector of the node the chart binds into.
    pub bind_to: String,
    /// Plot height in pixels.
    pub height: i32,
    /// Horizontal padding on each side.
    pub padding: i32,
    /// Values to plot.
    pub series: Vec<u64>,
    /// Axis categories and gridlines.
    pub categories: CategoriesLines,
    /// Tooltip position callback.
    pub positioner: TooltipPositioner,
}

impl ChartConfig {
    /// Build the configuration for the popup's compact area-spline chart.
    pub fn build(input: ChartInput) -> Self {
        let CategoriesLines { categories, lines } = input.categories;

        Self {
            bindto: input.bind_to,
            size: SizeOptions {
                height: input.height,
            },
            data: DataOptions {
                columns: vec![Column {
                    name: SERIES_ID.to_string(),
                    values: input.series,
                }],
                types: BTreeMap::from([(SERIES_ID.to_string(), ChartKind::AreaSpline)]),
                colors: BTreeMap::from([(SERIES_ID.to_string(), format!("url(#{GRADIENT_ID})"))]),
            },
            padding: PaddingOptions {
                left: input.padding,
                right: input.padding,
            },
            axis: AxisOptions {
                x: XAxisOptions {
                    show: true,
                    kind: "category",
                    categories,
                    tick: TickOptions {
                        outer: false,
                        multiline: false,
                    },
                },
                y: Toggle { show: false },
            },
            legend: Toggle { show: false },
            grid: GridOptions {
                lines: GridLinesOptions { front: false },
                x: GridXOptions { lines },
                focus: Toggle { show: true },
            },
            spline: SplineOptions {
                interpolation: InterpolationOptions { kind: "basis" },
            },
            point: Toggle { show: false },
            tooltip: TooltipHooks::new(input.positioner),
            oninit: InitHook::default(),
        }
    }

    /// Values of the plotted series.
    pub fn series(&self) -> &[u64] {
        self.data
            .columns
            .first()
            .map(|c| c.values.as_slice())
            .unwrap_or(&[])
    }

    /// Serialize the option object to JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
