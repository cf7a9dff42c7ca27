//! Error Banner Component
//!
//! Inline error display. Unlike a toast it has no timer; the message stays
//! until the next selection clears it, with prior data still shown below.

use leptos::*;

use crate::state::GlobalState;

/// Inline error banner bound to the global error message
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;

    view! {
        {move || {
            error.get().map(|message| view! {
                <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg">
                    <span class="text-lg">"✕"</span>
                    <span class="text-sm font-medium">{message}</span>
                </div>
            })
        }}
    }
}
