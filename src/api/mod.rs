//! API Layer
//!
//! HTTP client for the two upstream REST services and the error type shared
//! by both fetch stages.

pub mod client;
pub mod error;

pub use client::{fetch_countries, fetch_country_data, CountryData};
pub use error::FetchError;
