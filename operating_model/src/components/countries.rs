//! Country filter strip.

use leptos::prelude::*;

use crate::state::WidgetState;
use crate::types::Country;

/// Uniform-width country tags; at most one is highlighted.
#[component]
pub fn CountryStrip(state: RwSignal<WidgetState>) -> impl IntoView {
    view! {
        <div class="om-countries">
            {Country::ALL
                .into_iter()
                .map(|country| {
                    let is_selected = move || state.with(|s| s.selected_country() == Some(country));
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "om-country selected" } else { "om-country" }
                            data-country=country.label()
                            on:click=move |_| state.update(|s| s.select_country(country))
                        >
                            {country.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
