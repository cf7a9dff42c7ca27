//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod chart;
pub mod country_select;
pub mod date_filter;
pub mod loading;
pub mod nav;
pub mod stat_card;

pub use banner::ErrorBanner;
pub use chart::{DistributionChart, TrendChart};
pub use country_select::CountrySelect;
pub use date_filter::DateFilter;
pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::StatCard;
