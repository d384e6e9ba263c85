//! Click-through scenarios for the operating model widget.
//!
//! Each test drives `WidgetState` the way the click handlers do and checks
//! both the DOM-free layout and the rendered snapshot.

use operating_model::layout::visible_items;
use operating_model::types::{Country, ExpansionKey};
use operating_model::{Catalog, WidgetConfig, WidgetState, render_widget};
use pretty_assertions::assert_eq;

fn snapshot(catalog: &Catalog, state: &WidgetState) -> String {
    render_widget(catalog, &WidgetConfig::default(), state)
}

#[test]
fn fresh_widget_has_nothing_open_or_selected() {
    let catalog = Catalog::builtin();
    let state = WidgetState::new();

    assert!(state.expanded_keys().is_empty());
    assert_eq!(state.selected_item(), None);
    assert_eq!(state.selected_country(), None);
    assert!(visible_items(&catalog, &state).is_empty());
    assert!(!snapshot(&catalog, &state).contains("om-modal"));
}

#[test]
fn enabling_toggle_reveals_and_hides_items() {
    let catalog = Catalog::builtin();
    let mut state = WidgetState::new();

    state.toggle_section("ENABLING", None);
    let names: Vec<String> = visible_items(&catalog, &state)
        .into_iter()
        .map(|v| v.item.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Growth",
            "Collaboratives",
            "Industry",
            "Consulting Workforce",
            "Methods & Tools"
        ]
    );

    state.toggle_section("ENABLING", None);
    assert!(visible_items(&catalog, &state).is_empty());
    assert_eq!(state.selected_item(), None);
    assert!(!snapshot(&catalog, &state).contains("data-item="));
}

#[test]
fn growth_detail_opens_and_closes_without_touching_expansion() {
    let catalog = Catalog::builtin();
    let mut state = WidgetState::new();
    state.toggle_section("ENABLING", None);
    let expanded = state.expanded_keys();

    state.select_item(catalog.find_item("growth").unwrap());
    let item = state.selected_item().unwrap();
    assert_eq!(item.name, "Growth");
    assert_eq!(
        item.details,
        vec!["Investment cases", "GTM", "Sales Hub", "Knowledge mgmt"]
    );
    let html = snapshot(&catalog, &state);
    assert!(html.contains(r#"data-detail="growth""#));

    state.close_detail();
    assert_eq!(state.selected_item(), None);
    assert_eq!(state.expanded_keys(), expanded);
    assert!(!snapshot(&catalog, &state).contains("om-modal"));
}

#[test]
fn japan_then_cloud_labels_modal_and_cell() {
    let catalog = Catalog::builtin();
    let mut state = WidgetState::new();
    state.toggle_section("CONSULT_PROPOSITIONS", None);
    state.toggle_section("CONSULT_PROPOSITIONS", Some("GLOBAL"));

    state.select_country(Country::Japan);
    state.select_item(catalog.find_item("cloud").unwrap());

    let cloud = visible_items(&catalog, &state)
        .into_iter()
        .find(|v| v.item.id == "cloud")
        .unwrap();
    assert!(cloud.selected);
    assert_eq!(cloud.country, Some(Country::Japan));

    let html = snapshot(&catalog, &state);
    assert!(html.contains("Cloud - Japan"));
    assert!(html.contains(r#"class="om-item-country""#));
}

#[test]
fn switching_country_replaces_previous_one() {
    let mut state = WidgetState::new();
    state.select_country(Country::Us);
    state.select_country(Country::Canada);
    assert_eq!(state.selected_country(), Some(Country::Canada));

    let html = snapshot(&Catalog::builtin(), &state);
    assert_eq!(html.matches("om-country selected").count(), 1);
}

#[test]
fn every_header_double_toggle_is_identity() {
    let catalog = Catalog::builtin();
    let mut state = WidgetState::new();
    state.toggle_section("CHANNELS", None);
    let before = state.clone();

    for key in catalog.expansion_keys() {
        state.toggle(key.clone());
        state.toggle(key);
    }
    assert_eq!(state, before);
    assert!(state.is_expanded(&ExpansionKey::section("CHANNELS")));
}
