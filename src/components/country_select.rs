//! Country Selector Component
//!
//! Dropdown over the loaded catalog. An empty catalog renders no options;
//! the dashboard keeps working with whatever data it already has.

use leptos::*;

use crate::state::GlobalState;

/// Country dropdown bound to the catalog
#[component]
pub fn CountrySelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let countries = state.countries;
    let selected = state.selected_country;

    let on_change = move |ev| {
        state.select_country(event_target_value(&ev));
    };

    view! {
        <label class="block">
            <span class="text-sm text-gray-400">"Select Country"</span>
            <select
                class="mt-1 block w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-white"
                on:change=on_change
            >
                {move || {
                    let current = selected.get();
                    countries.get()
                        .into_iter()
                        .map(|country| {
                            let is_selected = country.code == current;
                            view! {
                                <option value=country.code selected=is_selected>
                                    {country.name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
