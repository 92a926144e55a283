//! Shared formatting utilities for the chart views.

/// Format a counter for summaries with an appropriate scale suffix.
///
/// - Values >= 1M display as "X.XM"
/// - Values >= 1K display as "X.XK"
/// - Smaller values display as integers
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Format a hovered value the way it is shown inside the tooltip.
///
/// Whole numbers are printed without a decimal part.
pub fn format_tooltip_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Tooltip markup for the hovered data points.
///
/// Only the first point is shown; no points renders as zero.
pub fn tooltip_contents(values: &[f64]) -> String {
    let value = values.first().copied().unwrap_or(0.0);
    format!(
        r#"<div id="tooltip" class="chart__tooltip">{}</div>"#,
        format_tooltip_value(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1500), "1.5K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn test_format_tooltip_value() {
        assert_eq!(format_tooltip_value(12.0), "12");
        assert_eq!(format_tooltip_value(2.5), "2.5");
    }

    #[test]
    fn test_tooltip_contents() {
        assert_eq!(
            tooltip_contents(&[17.0, 3.0]),
            r#"<div id="tooltip" class="chart__tooltip">17</div>"#
        );
        assert_eq!(
            tooltip_contents(&[]),
            r#"<div id="tooltip" class="chart__tooltip">0</div>"#
        );
    }
}
