//! Chart Series Projection
//!
//! Pure reshaping of a fetched timeline into the aligned label and value
//! arrays the chart components draw. No side effects, total on any input,
//! safe to call on every render.

use chrono::NaiveDate;

use crate::state::{DateWindow, Timeline};

/// Aligned, chart-ready view of a timeline restricted to a date window.
///
/// The four arrays always have equal length; downstream rendering treats a
/// value as immutable and a fresh one is produced on every recomputation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub cases: Vec<u64>,
    pub deaths: Vec<u64>,
    pub recovered: Vec<u64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

/// Parse an upstream date label as a calendar date.
///
/// Historical payloads use ISO `YYYY-MM-DD`; disease.sh also emits
/// non-padded `M/D/YY` labels, so both forms are accepted.
fn parse_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(label, "%m/%d/%y"))
        .ok()
}

/// Project a timeline into chart series, keeping only dates inside `window`.
///
/// The key order of the `cases` map is the output order; upstream payloads
/// are already chronological and are not re-sorted. Bounds compare as parsed
/// calendar dates, not strings. Dates missing from the deaths or recovered
/// maps chart as zero; labels that parse as no calendar date are skipped.
pub fn project(timeline: &Timeline, window: &DateWindow) -> ChartSeries {
    let mut series = ChartSeries::default();

    for (label, &cases) in &timeline.cases {
        let Some(parsed) = parse_label(label) else {
            continue;
        };
        if !window.contains(parsed) {
            continue;
        }

        series.labels.push(label.clone());
        series.cases.push(cases);
        series.deaths.push(timeline.deaths.get(label).copied().unwrap_or(0));
        series
            .recovered
            .push(timeline.recovered.get(label).copied().unwrap_or(0));
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn map(entries: &[(&str, u64)]) -> IndexMap<String, u64> {
        entries
            .iter()
            .map(|(date, count)| (date.to_string(), *count))
            .collect()
    }

    fn five_days() -> Timeline {
        let days = [
            ("2021-01-01", 10),
            ("2021-01-02", 20),
            ("2021-01-03", 30),
            ("2021-01-04", 40),
            ("2021-01-05", 50),
        ];
        Timeline {
            cases: map(&days),
            deaths: map(&days.map(|(date, count)| (date, count / 10))),
            recovered: map(&days.map(|(date, count)| (date, count / 2))),
        }
    }

    fn window(start: &str, end: &str) -> DateWindow {
        DateWindow::from_inputs(start, end)
    }

    #[test]
    fn output_arrays_always_align() {
        let timeline = five_days();
        for w in [
            DateWindow::default(),
            window("2021-01-02", ""),
            window("", "2021-01-04"),
            window("2021-01-05", "2021-01-01"),
        ] {
            let series = project(&timeline, &w);
            assert_eq!(series.labels.len(), series.cases.len());
            assert_eq!(series.labels.len(), series.deaths.len());
            assert_eq!(series.labels.len(), series.recovered.len());
        }
    }

    #[test]
    fn unset_window_keeps_every_date_in_order() {
        let series = project(&five_days(), &DateWindow::default());
        assert_eq!(
            series.labels,
            vec![
                "2021-01-01",
                "2021-01-02",
                "2021-01-03",
                "2021-01-04",
                "2021-01-05"
            ]
        );
        assert_eq!(series.cases, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let series = project(&five_days(), &window("2021-01-01", "2021-01-03"));
        assert_eq!(series.labels, vec!["2021-01-01", "2021-01-02", "2021-01-03"]);
    }

    #[test]
    fn inverted_window_yields_empty_series() {
        let series = project(&five_days(), &window("2021-01-04", "2021-01-02"));
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn dates_missing_from_secondary_series_chart_as_zero() {
        let timeline = Timeline {
            cases: map(&[("2021-01-01", 10), ("2021-01-02", 20)]),
            deaths: map(&[("2021-01-01", 1)]),
            recovered: IndexMap::new(),
        };

        let series = project(&timeline, &DateWindow::default());
        assert_eq!(series.deaths, vec![1, 0]);
        assert_eq!(series.recovered, vec![0, 0]);
    }

    #[test]
    fn short_form_labels_compare_as_calendar_dates() {
        // Lexically "1/2/21" < "2021-01-01"; as dates it is 2021-01-02 and
        // falls inside the window.
        let timeline = Timeline {
            cases: map(&[("1/2/21", 7)]),
            deaths: IndexMap::new(),
            recovered: IndexMap::new(),
        };

        let series = project(&timeline, &window("2021-01-01", "2021-01-03"));
        assert_eq!(series.labels, vec!["1/2/21"]);
        assert_eq!(series.cases, vec![7]);
    }

    #[test]
    fn unparseable_labels_are_skipped() {
        let timeline = Timeline {
            cases: map(&[("not-a-date", 99), ("2021-01-01", 10)]),
            deaths: IndexMap::new(),
            recovered: IndexMap::new(),
        };

        let series = project(&timeline, &DateWindow::default());
        assert_eq!(series.labels, vec!["2021-01-01"]);
    }

    #[test]
    fn dates_outside_either_bound_are_dropped() {
        let series = project(&five_days(), &window("2021-01-02", "2021-01-04"));
        assert_eq!(series.labels, vec!["2021-01-02", "2021-01-03", "2021-01-04"]);
        assert_eq!(series.deaths, vec![2, 3, 4]);
        assert_eq!(series.recovered, vec![10, 15, 20]);
    }
}
