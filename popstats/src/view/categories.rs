//! Axis categories and gridlines for each time range.
//!
//! Labels are cyclic relative to a [`CalendarAnchor`]: the bucket after the
//! newest one wraps around to the start of the day, week, month or year.
//! Day and month charts only label every [`LABEL_SPACING`]th bucket; week and
//! year charts label every bucket.

use serde::Serialize;

use popstats_common::{CalendarAnchor, Locale, Result, TimeRange};

/// Distance between labeled buckets on day and month charts.
pub const LABEL_SPACING: u32 = 3;

const HOURS_PER_DAY: u32 = 24;
const DAYS_PER_WEEK: u32 = 7;
const DAYS_PER_MONTH: u32 = 30;
const MONTHS_PER_YEAR: u32 = 12;

/// A vertical separator drawn at a bucket index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLine {
    pub value: usize,
}

impl GridLine {
    pub fn at(value: usize) -> Self {
        Self { value }
    }
}

/// Category labels and gridlines for one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoriesLines {
    /// One label per bucket position; unlabeled positions are empty.
    pub categories: Vec<String>,
    /// Gridline positions.
    pub lines: Vec<GridLine>,
}

/// Generate categories and gridlines for `range`.
///
/// Year categories are truncated to the last `series_len` labels, while all
/// 13 year gridlines are kept.
pub fn categories_lines(
    series_len: usize,
    range: TimeRange,
    anchor: &CalendarAnchor,
    locale: &dyn Locale,
) -> CategoriesLines {
    let mut out = CategoriesLines::default();

    match range {
        TimeRange::Day => {
            for i in 1..=HOURS_PER_DAY {
                if i % LABEL_SPACING == 0 {
                    let hour = (i + anchor.hour) % HOURS_PER_DAY;
                    out.categories.push(hour.to_string());
                    out.lines.push(GridLine::at((i - 1) as usize));
                } else {
                    out.categories.push(String::new());
                }
            }
        }
        TimeRange::Week => {
            for i in 0..DAYS_PER_WEEK {
                let weekday = (anchor.weekday + i) % DAYS_PER_WEEK;
                out.categories
                    .push(locale.weekday_name(weekday as usize).to_string());
                out.lines.push(GridLine::at(i as usize));
            }
        }
        TimeRange::Month => {
            let month_len = anchor.days_in_previous_month.max(1);
            for i in 0..=DAYS_PER_MONTH {
                if i % LABEL_SPACING == 0 {
                    let date = ((i + anchor.day_of_month) % month_len) + 1;
                    out.categories.push(date.to_string());
                    out.lines.push(GridLine::at(i as usize));
                } else {
                    out.categories.push(String::new());
                }
            }
        }
        TimeRange::Year => {
            for i in 0..=MONTHS_PER_YEAR {
                let month = (anchor.month + i) % MONTHS_PER_YEAR;
                out.categories
                    .push(locale.month_name(month as usize).to_string());
                out.lines.push(GridLine::at(i as usize));
            }
            let excess = out.categories.len().saturating_sub(series_len);
            out.categories.drain(..excess);
        }
    }

    out
}

/// Generate categories for a range given by key.
///
/// Fails with [`popstats_common::Error::UnsupportedRange`] when the key names
/// no known range.
pub fn categories_lines_by_key(
    series_len: usize,
    range_key: &str,
    anchor: &CalendarAnchor,
    locale: &dyn Locale,
) -> Result<CategoriesLines> {
    let range = range_key.parse::<TimeRange>()?;
    Ok(categories_lines(series_len, range, anchor, locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use popstats_common::{Error, MessageCatalog};

    fn anchor() -> CalendarAnchor {
        CalendarAnchor {
            hour: 5,
            weekday: 0,
            day_of_month: 1,
            month: 0,
            days_in_previous_month: 31,
        }
    }

    fn generate(len: usize, range: TimeRange, anchor: &CalendarAnchor) -> CategoriesLines {
        categories_lines(len, range, anchor, &MessageCatalog::english())
    }

    #[test]
    fn test_day_labels_every_third_hour() {
        let out = generate(24, TimeRange::Day, &anchor());

        assert_eq!(out.categories.len(), 24);
        let labeled: Vec<usize> = out
            .categories
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(labeled, vec![2, 5, 8, 11, 14, 17, 20, 23]);
        assert_eq!(out.categories[2], "8");
        assert_eq!(out.categories[23], "5");

        let lines: Vec<usize> = out.lines.iter().map(|l| l.value).collect();
        assert_eq!(lines, labeled);
    }

    #[test]
    fn test_day_wraps_past_midnight() {
        let late = CalendarAnchor {
            hour: 23,
            ..anchor()
        };
        let out = generate(24, TimeRange::Day, &late);
        assert_eq!(out.categories[2], "2");
        assert_eq!(out.categories[23], "23");
    }

    #[test]
    fn test_week_starting_monday() {
        let out = generate(7, TimeRange::Week, &anchor());

        assert_eq!(
            out.categories,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(out.lines, (0..7).map(GridLine::at).collect::<Vec<_>>());
    }

    #[test]
    fn test_week_wraps() {
        let friday = CalendarAnchor {
            weekday: 4,
            ..anchor()
        };
        let out = generate(7, TimeRange::Week, &friday);
        assert_eq!(
            out.categories,
            vec!["Fri", "Sat", "Sun", "Mon", "Tue", "Wed", "Thu"]
        );
    }

    #[test]
    fn test_month_labels() {
        let out = generate(31, TimeRange::Month, &anchor());

        assert_eq!(out.categories.len(), 31);
        assert_eq!(out.categories[0], "2");
        assert_eq!(out.categories[1], "");
        assert_eq!(out.categories[3], "5");
        assert_eq!(out.categories[30], "1");

        let lines: Vec<usize> = out.lines.iter().map(|l| l.value).collect();
        assert_eq!(lines, vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30]);
    }

    #[test]
    fn test_month_wraps_on_short_previous_month() {
        let march = CalendarAnchor {
            day_of_month: 20,
            days_in_previous_month: 28,
            ..anchor()
        };
        let out = generate(31, TimeRange::Month, &march);
        // (9 + 20) % 28 + 1
        assert_eq!(out.categories[9], "2");
        assert_eq!(out.categories[6], "27");
    }

    #[test]
    fn test_year_truncates_categories_only() {
        let june = CalendarAnchor {
            month: 5,
            ..anchor()
        };
        let out = generate(12, TimeRange::Year, &june);

        assert_eq!(out.categories.len(), 12);
        assert_eq!(out.categories[0], "Jul");
        assert_eq!(out.categories[11], "Jun");
        assert_eq!(out.lines.len(), 13);
        assert_eq!(out.lines.last(), Some(&GridLine::at(12)));
    }

    #[test]
    fn test_year_shorter_series() {
        let out = generate(3, TimeRange::Year, &anchor());
        assert_eq!(out.categories, vec!["Nov", "Dec", "Jan"]);
        assert_eq!(out.lines.len(), 13);

        let empty = generate(0, TimeRange::Year, &anchor());
        assert!(empty.categories.is_empty());
    }

    #[test]
    fn test_missing_translations_are_empty_labels() {
        let out = categories_lines(7, TimeRange::Week, &anchor(), &MessageCatalog::empty());
        assert!(out.categories.iter().all(String::is_empty));
        assert_eq!(out.lines.len(), 7);
    }

    #[test]
    fn test_idempotent() {
        for range in TimeRange::all() {
            let first = generate(24, *range, &anchor());
            let second = generate(24, *range, &anchor());
            assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_unknown_key_is_error() {
        let result =
            categories_lines_by_key(24, "hourly", &anchor(), &MessageCatalog::english());
        assert!(matches!(result, Err(Error::UnsupportedRange(ref k)) if k == "hourly"));

        let ok = categories_lines_by_key(7, "week", &anchor(), &MessageCatalog::english());
        assert_eq!(ok.unwrap().categories.len(), 7);
    }
}
