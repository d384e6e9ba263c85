//! Detail modal for the selected item.

use leptos::prelude::*;

use super::{ICON_GLOBE, ICON_USERS, ICON_X, Icon};
use crate::config::Placeholders;
use crate::state::WidgetState;
use crate::types::{Country, Item};

/// Modal heading: the item name, suffixed with the active country.
pub fn detail_heading(item: &Item, country: Option<Country>) -> String {
    match country {
        Some(country) => format!("{} - {}", item.name, country),
        None => item.name.clone(),
    }
}

/// Shown while an item is selected. Closing keeps the country selection.
#[component]
pub fn DetailModal(
    item: Item,
    country: Option<Country>,
    placeholders: Placeholders,
    state: RwSignal<WidgetState>,
) -> impl IntoView {
    let heading = detail_heading(&item, country);
    let region = country.map_or("Global", Country::label);
    let close = move |_| state.update(WidgetState::close_detail);
    let details = item.details;

    view! {
        <div class="om-modal-backdrop">
            <div class="om-modal" role="dialog" aria-modal="true" data-detail=item.id>
                <div class="om-modal-inner">
                    <div class="om-modal-head">
                        <div>
                            <h2 class="om-modal-title">{heading}</h2>
                            <p class="om-modal-country">{region}</p>
                        </div>
                        <button type="button" class="om-close" title="Close" on:click=close>
                            <Icon path=ICON_X size="20" />
                        </button>
                    </div>

                    <div class="om-modal-block">
                        <h3 class="om-modal-block-title">
                            <Icon path=ICON_GLOBE size="20" />
                            "Global Leader"
                        </h3>
                        <p class="om-modal-text">{placeholders.global_leader}</p>
                    </div>

                    <div class="om-modal-block">
                        <h3 class="om-modal-block-title">
                            <Icon path=ICON_USERS size="20" />
                            "Key Contacts"
                        </h3>
                        <p class="om-modal-text italic">{placeholders.key_contacts}</p>
                    </div>

                    {(!details.is_empty()).then(|| view! {
                        <div class="om-modal-block">
                            <h3 class="om-modal-block-title">"Components"</h3>
                            <div class="om-modal-details">
                                {details
                                    .into_iter()
                                    .map(|detail| view! { <div class="om-modal-detail">{detail}</div> })
                                    .collect_view()}
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_appends_country() {
        let item = Item::new("cloud", "Cloud");
        assert_eq!(detail_heading(&item, Some(Country::Japan)), "Cloud - Japan");
        assert_eq!(detail_heading(&item, None), "Cloud");
    }
}
