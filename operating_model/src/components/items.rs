//! Reflowing item grid and item cells.

use leptos::prelude::*;

use crate::state::WidgetState;
use crate::types::Item;

#[component]
fn ItemCell(item: Item, state: RwSignal<WidgetState>) -> impl IntoView {
    let id = item.id.clone();
    let data_id = item.id.clone();
    let name = item.name.clone();
    let details = item.details_line();

    let is_selected = move || state.with(|s| s.is_item_selected(&id));
    let select = move |_| state.update(|s| s.select_item(&item));
    // The active country is shown on every cell, not only the selected one
    let country = move || state.with(WidgetState::selected_country);

    view! {
        <div
            class=move || if is_selected() { "om-item selected" } else { "om-item" }
            data-item=data_id
            on:click=select
        >
            <div class="om-item-name">{name}</div>
            {details.map(|line| view! { <div class="om-item-details">{line}</div> })}
            {move || country().map(|c| view! { <div class="om-item-country">{c.label()}</div> })}
        </div>
    }
}

/// Items laid out in a wrapping grid; `grid_style` carries the column template.
#[component]
pub fn ItemGrid(items: Vec<Item>, state: RwSignal<WidgetState>, grid_style: String) -> impl IntoView {
    view! {
        <div class="om-grid" style=grid_style>
            {items
                .into_iter()
                .map(|item| view! { <ItemCell item=item state=state /> })
                .collect_view()}
        </div>
    }
}
