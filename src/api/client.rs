//! HTTP API Client
//!
//! Functions for communicating with the two upstream REST services: the
//! restcountries catalog and the disease.sh statistics API.

use futures_util::future;
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::api::error::FetchError;
use crate::state::{AggregateStats, Country, Timeline};

/// Endpoint returning every country with its name and two-letter code
pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

/// Default base URL for the statistics service
pub const DEFAULT_STATS_BASE: &str = "https://disease.sh/v3/covid-19";

/// Lookback window for the historical endpoint, in days
pub const HISTORY_LASTDAYS: u32 = 1500;

/// Get the statistics base URL from local storage or use the default
pub fn get_stats_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("epidash_api_base").ok().flatten())
        .unwrap_or_else(|| DEFAULT_STATS_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct CountryRecord {
    name: CountryName,
    cca2: String,
}

#[derive(Debug, serde::Deserialize)]
struct CountryName {
    common: String,
}

/// Historical payload, either `{timeline: {...}}` or the maps at top level.
///
/// Anything that satisfies neither shape is a parse failure rather than
/// silently-empty data.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum HistoricalResponse {
    Wrapped { timeline: Timeline },
    Bare(Timeline),
}

impl HistoricalResponse {
    fn into_timeline(self) -> Timeline {
        match self {
            HistoricalResponse::Wrapped { timeline } => timeline,
            HistoricalResponse::Bare(timeline) => timeline,
        }
    }
}

/// Everything the per-country fetch produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryData {
    pub stats: AggregateStats,
    pub timeline: Timeline,
}

// ============ API Functions ============

/// Fetch the selectable countries, codes lowercased, sorted by name
pub async fn fetch_countries() -> Result<Vec<Country>, FetchError> {
    let response = Request::get(COUNTRIES_URL)
        .send()
        .await
        .map_err(|e| FetchError::countries(format!("network error: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::countries(format!(
            "API returned {}",
            response.status()
        )));
    }

    let records: Vec<CountryRecord> = response
        .json()
        .await
        .map_err(|e| FetchError::countries(format!("parse error: {}", e)))?;

    Ok(normalize_countries(records))
}

/// Map raw catalog records to `Country` and sort them for display.
///
/// Comparison folds case as a stand-in for locale collation; the raw name
/// breaks ties so the order is total.
fn normalize_countries(records: Vec<CountryRecord>) -> Vec<Country> {
    let mut countries: Vec<Country> = records
        .into_iter()
        .map(|record| Country {
            name: record.name.common,
            code: record.cca2.to_lowercase(),
        })
        .collect();

    countries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    countries
}

/// Fetch aggregate totals and the historical timeline for one country.
///
/// The two requests are independent and issued concurrently. Either one
/// failing fails the whole fetch, so callers never apply a partial update.
pub async fn fetch_country_data(
    code: &str,
    signal: Option<&AbortSignal>,
) -> Result<CountryData, FetchError> {
    let (stats, timeline) = future::join(
        fetch_country_stats(code, signal),
        fetch_historical(code, signal),
    )
    .await;

    Ok(CountryData {
        stats: stats?,
        timeline: timeline?,
    })
}

/// Fetch the latest cumulative totals for one country
async fn fetch_country_stats(
    code: &str,
    signal: Option<&AbortSignal>,
) -> Result<AggregateStats, FetchError> {
    let url = format!("{}/countries/{}", get_stats_base(), code);

    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::historical(format!("network error: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::historical(format!(
            "API returned {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::historical(format!("parse error: {}", e)))
}

/// Fetch the daily cumulative timeline for one country
async fn fetch_historical(
    code: &str,
    signal: Option<&AbortSignal>,
) -> Result<Timeline, FetchError> {
    let url = format!(
        "{}/historical/{}?lastdays={}",
        get_stats_base(),
        code,
        HISTORY_LASTDAYS
    );

    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::historical(format!("network error: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::historical(format!(
            "API returned {}",
            response.status()
        )));
    }

    let payload: HistoricalResponse = response
        .json()
        .await
        .map_err(|e| FetchError::historical(format!("parse error: {}", e)))?;

    Ok(payload.into_timeline())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, cca2: &str) -> CountryRecord {
        CountryRecord {
            name: CountryName {
                common: name.to_string(),
            },
            cca2: cca2.to_string(),
        }
    }

    #[test]
    fn catalog_codes_are_lowercased() {
        let countries = normalize_countries(vec![record("Brazil", "BR"), record("Peru", "PE")]);
        assert!(countries.iter().all(|c| c.code == c.code.to_lowercase()));
        assert_eq!(countries[0].code, "br");
    }

    #[test]
    fn catalog_is_sorted_by_name_ignoring_case() {
        let countries = normalize_countries(vec![
            record("zimbabwe", "ZW"),
            record("Albania", "AL"),
            record("united States", "US"),
            record("Brazil", "BR"),
        ]);
        let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Albania", "Brazil", "united States", "zimbabwe"]);
    }

    #[test]
    fn wrapped_and_bare_payloads_normalize_identically() {
        let inner = json!({
            "cases": {"2021-01-01": 5, "2021-01-02": 7},
            "deaths": {"2021-01-01": 1, "2021-01-02": 1},
            "recovered": {"2021-01-01": 2, "2021-01-02": 4},
        });

        let bare: HistoricalResponse = serde_json::from_value(inner.clone()).unwrap();
        let wrapped: HistoricalResponse =
            serde_json::from_value(json!({ "timeline": inner })).unwrap();

        assert_eq!(bare.into_timeline(), wrapped.into_timeline());
    }

    #[test]
    fn payloads_missing_secondary_series_still_parse() {
        let payload: HistoricalResponse =
            serde_json::from_value(json!({"cases": {"2021-01-01": 5}})).unwrap();
        let timeline = payload.into_timeline();

        assert_eq!(timeline.cases.len(), 1);
        assert!(timeline.deaths.is_empty());
        assert!(timeline.recovered.is_empty());
    }

    #[test]
    fn unrecognized_payload_shapes_are_rejected() {
        let result: Result<HistoricalResponse, _> =
            serde_json::from_value(json!({"message": "Country not found"}));
        assert!(result.is_err());
    }

    #[test]
    fn timeline_preserves_upstream_date_order() {
        // Parsed straight from text, as at runtime; key order must survive.
        let raw = r#"{"cases": {"2021-01-03": 3, "2021-01-01": 1, "2021-01-02": 2}}"#;
        let payload: HistoricalResponse = serde_json::from_str(raw).unwrap();

        let dates: Vec<_> = payload.into_timeline().cases.keys().cloned().collect();
        assert_eq!(dates, vec!["2021-01-03", "2021-01-01", "2021-01-02"]);
    }
}
