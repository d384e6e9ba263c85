//! Expansion and selection state for one widget instance.
//!
//! [`WidgetState`] is a plain value; the component tree keeps it inside a
//! Leptos `RwSignal` and mutates it from click handlers:
//!
//! ```rust
//! use operating_model::catalog::Catalog;
//! use operating_model::state::WidgetState;
//! use operating_model::types::{Country, ExpansionKey};
//!
//! let catalog = Catalog::builtin();
//! let mut state = WidgetState::default();
//!
//! state.toggle_section("ENABLING", None);
//! assert!(state.is_expanded(&ExpansionKey::section("ENABLING")));
//!
//! state.select_country(Country::Japan);
//! state.select_item(catalog.find_item("growth").unwrap());
//! assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("Growth"));
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{Country, ExpansionKey, Item};

/// Which headers are open, which item is selected, which country is active.
///
/// Every transition is total: there is no input that can fail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    expanded: HashSet<ExpansionKey>,
    selected_item: Option<Item>,
    selected_country: Option<Country>,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a section header, or a subsection header when `subsection` is given.
    pub fn toggle_section(&mut self, section: &str, subsection: Option<&str>) {
        let key = match subsection {
            Some(sub) => ExpansionKey::subsection(section, sub),
            None => ExpansionKey::section(section),
        };
        self.toggle(key);
    }

    /// Flip the header identified by `key`.
    pub fn toggle(&mut self, key: ExpansionKey) {
        let expanded = if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key.clone());
            true
        };
        debug!(key = %key, expanded, "toggled header");
    }

    /// Open `key` without flipping it.
    pub fn expand(&mut self, key: ExpansionKey) {
        self.expanded.insert(key);
    }

    /// Open every header in the catalog.
    pub fn expand_all(&mut self, catalog: &Catalog) {
        self.expanded.extend(catalog.expansion_keys());
        debug!(open = self.expanded.len(), "expanded all headers");
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        debug!("collapsed all headers");
    }

    /// Select `item`, or clear the selection if it is already selected.
    pub fn select_item(&mut self, item: &Item) {
        if self.is_item_selected(&item.id) {
            self.selected_item = None;
            debug!(item = %item.id, "deselected item");
        } else {
            self.selected_item = Some(item.clone());
            debug!(item = %item.id, "selected item");
        }
    }

    /// Select `country`, or clear it if it is already the active one.
    pub fn select_country(&mut self, country: Country) {
        if self.selected_country == Some(country) {
            self.selected_country = None;
            debug!(%country, "deselected country");
        } else {
            self.selected_country = Some(country);
            debug!(%country, "selected country");
        }
    }

    /// Dismiss the detail modal. The country stays selected.
    pub fn close_detail(&mut self) {
        if let Some(item) = self.selected_item.take() {
            debug!(item = %item.id, "closed detail");
        }
    }

    pub fn is_expanded(&self, key: &ExpansionKey) -> bool {
        self.expanded.contains(key)
    }

    pub fn is_item_selected(&self, id: &str) -> bool {
        self.selected_item.as_ref().is_some_and(|item| item.id == id)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref()
    }

    pub fn selected_country(&self) -> Option<Country> {
        self.selected_country
    }

    /// Open headers, sorted for stable output.
    pub fn expanded_keys(&self) -> Vec<ExpansionKey> {
        let mut keys: Vec<ExpansionKey> = self.expanded.iter().cloned().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn starts_empty() {
        let state = WidgetState::new();
        assert!(state.expanded_keys().is_empty());
        assert!(state.selected_item().is_none());
        assert!(state.selected_country().is_none());
    }

    #[test]
    fn double_toggle_restores_every_header() {
        let catalog = catalog();
        for key in catalog.expansion_keys() {
            let mut state = WidgetState::new();
            let before = state.is_expanded(&key);
            state.toggle(key.clone());
            assert_ne!(state.is_expanded(&key), before, "{key} did not flip");
            state.toggle(key.clone());
            assert_eq!(state.is_expanded(&key), before, "{key} did not restore");
        }
    }

    #[test]
    fn double_toggle_restores_when_already_open() {
        let mut state = WidgetState::new();
        state.toggle_section("ENABLING", None);
        state.toggle_section("CHANNELS", None);
        state.toggle_section("CHANNELS", None);
        assert_eq!(state.expanded_keys(), vec![ExpansionKey::section("ENABLING")]);
    }

    #[test]
    fn subsection_toggle_is_independent_of_its_section() {
        let mut state = WidgetState::new();
        state.toggle_section("CONSULT_PROPOSITIONS", Some("GLOBAL"));
        assert!(state.is_expanded(&ExpansionKey::subsection("CONSULT_PROPOSITIONS", "GLOBAL")));
        assert!(!state.is_expanded(&ExpansionKey::section("CONSULT_PROPOSITIONS")));
    }

    #[test]
    fn selecting_item_twice_clears_selection() {
        let catalog = catalog();
        for item in catalog.items() {
            let mut state = WidgetState::new();
            state.select_item(item);
            assert!(state.is_item_selected(&item.id));
            state.select_item(item);
            assert!(state.selected_item().is_none(), "{} still selected", item.id);
        }
    }

    #[test]
    fn selecting_another_item_replaces_selection() {
        let catalog = catalog();
        let mut state = WidgetState::new();
        state.select_item(catalog.find_item("cloud").unwrap());
        state.select_item(catalog.find_item("growth").unwrap());
        assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("growth"));
        assert!(!state.is_item_selected("cloud"));
    }

    #[test]
    fn at_most_one_country_selected() {
        let mut state = WidgetState::new();
        state.select_country(Country::France);
        state.select_country(Country::Japan);
        assert_eq!(state.selected_country(), Some(Country::Japan));
        state.select_country(Country::Japan);
        assert_eq!(state.selected_country(), None);
    }

    #[test]
    fn close_detail_keeps_country_and_expansion() {
        let catalog = catalog();
        let mut state = WidgetState::new();
        state.toggle_section("ENABLING", None);
        state.select_country(Country::India);
        state.select_item(catalog.find_item("growth").unwrap());
        let expanded_before = state.expanded_keys();

        state.close_detail();

        assert!(state.selected_item().is_none());
        assert_eq!(state.selected_country(), Some(Country::India));
        assert_eq!(state.expanded_keys(), expanded_before);
    }

    #[test]
    fn selection_survives_collapsing_its_section() {
        let catalog = catalog();
        let mut state = WidgetState::new();
        state.toggle_section("ENABLING", None);
        state.select_item(catalog.find_item("industry").unwrap());
        state.toggle_section("ENABLING", None);
        assert!(state.is_item_selected("industry"));
    }

    #[test]
    fn expand_all_then_collapse_all() {
        let catalog = catalog();
        let mut state = WidgetState::new();
        state.expand_all(&catalog);
        assert_eq!(state.expanded_keys().len(), catalog.expansion_keys().len());
        state.collapse_all();
        assert!(state.expanded_keys().is_empty());
    }
}
