//! Date Filter Component
//!
//! Start and end date inputs bounding the charted timeline. An empty input
//! leaves that side of the window unbounded.

use leptos::*;

use crate::state::{DateWindow, GlobalState};

/// Paired start/end date inputs
#[component]
pub fn DateFilter() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (start_raw, set_start_raw) = create_signal(String::new());
    let (end_raw, set_end_raw) = create_signal(String::new());

    let state_for_start = state.clone();
    let on_start = move |ev| {
        set_start_raw.set(event_target_value(&ev));
        state_for_start.set_date_window(DateWindow::from_inputs(
            &start_raw.get_untracked(),
            &end_raw.get_untracked(),
        ));
    };

    let state_for_end = state;
    let on_end = move |ev| {
        set_end_raw.set(event_target_value(&ev));
        state_for_end.set_date_window(DateWindow::from_inputs(
            &start_raw.get_untracked(),
            &end_raw.get_untracked(),
        ));
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <label class="block">
                <span class="text-sm text-gray-400">"Start Date"</span>
                <input
                    type="date"
                    class="mt-1 block w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-white"
                    prop:value=start_raw
                    on:change=on_start
                />
            </label>

            <label class="block">
                <span class="text-sm text-gray-400">"End Date"</span>
                <input
                    type="date"
                    class="mt-1 block w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-white"
                    prop:value=end_raw
                    on:change=on_end
                />
            </label>
        </div>
    }
}
