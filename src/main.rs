//! COVID-19 Dashboard
//!
//! Country-level epidemiological statistics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Aggregate case, death and recovery totals per country
//! - Historical daily trend chart with an optional date window
//! - Distribution chart of the aggregate totals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Data comes straight from two public REST APIs: the
//! restcountries service for the selectable country catalog and the
//! disease.sh service for per-country totals and historical timelines. All
//! transformation happens client-side in three stages: catalog load,
//! per-country fetch, series projection.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod series;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
