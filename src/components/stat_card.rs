//! Stat Card Component
//!
//! Displays one aggregate total on a colored card.

use leptos::*;
use num_format::{Locale, ToFormattedString};

/// Colored card showing a single aggregate total
#[component]
pub fn StatCard(
    /// Card title
    title: &'static str,
    /// Background accent class
    color: &'static str,
    /// Value to display
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg p-4 shadow-lg text-white transition hover:shadow-xl {}", color)>
            <span class="text-sm opacity-80">{title}</span>
            <div class="text-3xl font-bold mt-2">
                {move || value.get().to_formatted_string(&Locale::en)}
            </div>
        </div>
    }
}
