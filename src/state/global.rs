//! Global Application State
//!
//! Reactive state management using Leptos signals. The state container owns
//! the four values the presentation layer reads (countries, stats, chart
//! series, error) and the two setters it calls (country selection, date
//! window), and drives the fetch stages behind them.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use indexmap::IndexMap;
use leptos::*;
use web_sys::AbortController;

use crate::api;
use crate::series::{project, ChartSeries};

/// Country code shown before the user picks anything
pub const DEFAULT_COUNTRY: &str = "usa";

/// Timeout for either upstream request, in milliseconds
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Selectable countries, sorted by display name
    pub countries: RwSignal<Vec<Country>>,
    /// Country code the dashboard is currently showing
    pub selected_country: RwSignal<String>,
    /// Optional inclusive date bounds applied to the timeline
    pub date_window: RwSignal<DateWindow>,
    /// Latest aggregate totals for the selected country
    pub stats: RwSignal<AggregateStats>,
    /// Daily cumulative counts for the selected country
    pub timeline: RwSignal<Timeline>,
    /// Chart-ready projection of the timeline through the date window
    pub chart_series: Memo<ChartSeries>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Generation of the most recent fetch; stale completions are dropped
    generation: RwSignal<u64>,
    /// Abort handle for the in-flight request pair
    inflight: Rc<RefCell<Option<AbortController>>>,
}

/// A selectable country
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    /// Lowercase two-letter code, the lookup key for the statistics API
    pub code: String,
}

/// Latest cumulative totals for one country
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct AggregateStats {
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub recovered: u64,
}

/// Daily cumulative counts keyed by date label, in upstream order.
///
/// The three key sets are equal in well-formed payloads; consumers must not
/// assume it. `cases` is the source of truth for which dates exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Timeline {
    pub cases: IndexMap<String, u64>,
    #[serde(default)]
    pub deaths: IndexMap<String, u64>,
    #[serde(default)]
    pub recovered: IndexMap<String, u64>,
}

/// Optional inclusive [start, end] filter over the timeline.
///
/// Either bound may be unset, meaning unbounded on that side. Out-of-order
/// bounds are legal and simply match nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// Build a window from raw `<input type="date">` values; empty or
    /// unparseable input means unbounded on that side.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        let parse = |value: &str| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
        Self {
            start: parse(start),
            end: parse(end),
        }
    }

    /// Whether `date` satisfies both bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let timeline = create_rw_signal(Timeline::default());
    let date_window = create_rw_signal(DateWindow::default());

    // Pure projection, cached until the timeline or the window changes
    let chart_series = create_memo(move |_| project(&timeline.get(), &date_window.get()));

    let state = GlobalState {
        countries: create_rw_signal(Vec::new()),
        selected_country: create_rw_signal(DEFAULT_COUNTRY.to_string()),
        date_window,
        stats: create_rw_signal(AggregateStats::default()),
        timeline,
        chart_series,
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        generation: create_rw_signal(0),
        inflight: Rc::new(RefCell::new(None)),
    };

    provide_context(state);
}

impl GlobalState {
    /// Fetch and publish the country catalog. Invoked once on mount; a
    /// failure leaves the catalog empty and surfaces the error.
    pub fn load_countries(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::fetch_countries().await {
                Ok(countries) => state.countries.set(countries),
                Err(e) => state.report_error(&e),
            }
        });
    }

    /// Switch the dashboard to a new country and refetch its data
    pub fn select_country(&self, code: String) {
        if code.is_empty() {
            return;
        }
        self.selected_country.set(code);
        self.error.set(None);
        self.refresh();
    }

    /// Update the date filter; the chart series recomputes reactively.
    /// The fetched timeline does not depend on the window, so no refetch.
    pub fn set_date_window(&self, window: DateWindow) {
        self.date_window.set(window);
        self.error.set(None);
    }

    /// Fetch totals and history for the selected country.
    ///
    /// Each call supersedes the previous one: the in-flight request pair is
    /// aborted and any completion carrying a stale generation is dropped, so
    /// the last selection wins regardless of network ordering. On failure the
    /// previous stats and timeline stay in place.
    pub fn refresh(&self) {
        let code = self.selected_country.get_untracked();
        if code.is_empty() {
            return;
        }

        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);

        if let Some(previous) = self.inflight.borrow_mut().take() {
            previous.abort();
        }
        let controller = AbortController::new().ok();
        *self.inflight.borrow_mut() = controller.clone();

        // Abandon requests that outlive the timeout
        let timeout = controller.clone().map(|ctrl| {
            Timeout::new(REQUEST_TIMEOUT_MS, move || ctrl.abort())
        });

        self.loading.set(true);
        let state = self.clone();
        spawn_local(async move {
            let signal = controller.as_ref().map(|ctrl| ctrl.signal());
            let result = api::fetch_country_data(&code, signal.as_ref()).await;
            drop(timeout);

            // A newer selection superseded this fetch; drop the result
            if state.generation.get_untracked() != generation {
                return;
            }

            state.loading.set(false);
            match result {
                Ok(data) => {
                    state.stats.set(data.stats);
                    state.timeline.set(data.timeline);
                }
                Err(e) => state.report_error(&e),
            }
        });
    }

    /// Log the cause and surface the user-visible message
    fn report_error(&self, error: &api::FetchError) {
        web_sys::console::error_1(&format!("{} ({})", error, error.detail()).into());
        self.error.set(Some(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn unbounded_window_contains_everything() {
        let window = DateWindow::default();
        assert!(window.contains(date("1970-01-01")));
        assert!(window.contains(date("2021-06-15")));
    }

    #[test]
    fn bounds_are_inclusive() {
        let window = DateWindow::from_inputs("2021-01-01", "2021-01-03");
        assert!(window.contains(date("2021-01-01")));
        assert!(window.contains(date("2021-01-02")));
        assert!(window.contains(date("2021-01-03")));
        assert!(!window.contains(date("2020-12-31")));
        assert!(!window.contains(date("2021-01-04")));
    }

    #[test]
    fn inverted_bounds_match_nothing() {
        let window = DateWindow::from_inputs("2021-01-03", "2021-01-01");
        for day in ["2021-01-01", "2021-01-02", "2021-01-03"] {
            assert!(!window.contains(date(day)));
        }
    }

    #[test]
    fn empty_inputs_leave_a_side_unbounded() {
        let window = DateWindow::from_inputs("", "2021-01-03");
        assert_eq!(window.start, None);
        assert!(window.contains(date("1970-01-01")));
        assert!(!window.contains(date("2021-01-04")));
    }
}
