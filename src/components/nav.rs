//! Navigation Component
//!
//! Header bar with the dashboard title.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🦠"</span>
                        <span class="text-xl font-bold text-white">"COVID-19 Dashboard"</span>
                    </A>

                    <span class="hidden md:block text-sm text-gray-400">
                        "Cases, deaths and recoveries by country"
                    </span>
                </div>
            </div>
        </nav>
    }
}
