//! Dashboard Page
//!
//! The single page: country and date selectors, aggregate cards, charts.

use leptos::*;

use crate::components::{
    CountrySelect, DateFilter, DistributionChart, ErrorBanner, Loading, StatCard, TrendChart,
};
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stats = state.stats;
    let loading = state.loading;

    // Load the catalog and the default country once on mount
    create_effect(move |_| {
        state.load_countries();
        state.refresh();
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-center">"COVID-19 Dashboard"</h1>
                <p class="text-gray-400 mt-1 text-center">
                    "Pick a country and a date range to explore the outbreak"
                </p>
            </div>

            <ErrorBanner />

            // Selection controls
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <CountrySelect />
                <DateFilter />
            </section>

            // Aggregate totals
            <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard
                    title="Total Cases"
                    color="bg-green-600"
                    value=Signal::derive(move || stats.get().cases)
                />
                <StatCard
                    title="Deaths"
                    color="bg-red-600"
                    value=Signal::derive(move || stats.get().deaths)
                />
                <StatCard
                    title="Recovered"
                    color="bg-blue-600"
                    value=Signal::derive(move || stats.get().recovered)
                />
            </section>

            // Charts side by side
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Historical Trend"</h2>
                    {move || {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <TrendChart /> }.into_view()
                        }
                    }}
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Distribution"</h2>
                    <DistributionChart />
                </section>
            </div>
        </div>
    }
}
