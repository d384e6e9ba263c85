//! Pure derivation of what the widget currently shows.
//!
//! The Leptos components read the state signal directly; this module answers
//! the same question without a DOM, for the CLI outline and for tests.

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::state::WidgetState;
use crate::types::{Country, ExpansionKey, Item, SectionBody};

const OPEN: char = '▾';
const CLOSED: char = '▸';

/// An item cell that is currently on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisibleItem {
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    #[serde(flatten)]
    pub item: Item,
    pub selected: bool,
    /// Country label shown under the cell (the same for every cell)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

/// Items whose headers are all expanded, in catalog order.
pub fn visible_items(catalog: &Catalog, state: &WidgetState) -> Vec<VisibleItem> {
    let country = state.selected_country();
    let cell = |section: &str, subsection: Option<&str>, item: &Item| VisibleItem {
        section: section.to_string(),
        subsection: subsection.map(str::to_string),
        item: item.clone(),
        selected: state.is_item_selected(&item.id),
        country,
    };

    let mut visible = Vec::new();
    for section in &catalog.sections {
        if !state.is_expanded(&ExpansionKey::section(&section.key)) {
            continue;
        }
        match &section.body {
            SectionBody::Flat(items) => {
                visible.extend(items.iter().map(|item| cell(&section.key, None, item)));
            }
            SectionBody::Grouped(subs) => {
                for sub in subs {
                    let key = ExpansionKey::subsection(&section.key, &sub.key);
                    if state.is_expanded(&key) {
                        visible.extend(
                            sub.items
                                .iter()
                                .map(|item| cell(&section.key, Some(&sub.key), item)),
                        );
                    }
                }
            }
        }
    }
    visible
}

fn marker(open: bool) -> char {
    if open { OPEN } else { CLOSED }
}

fn write_items(out: &mut String, indent: usize, items: &[Item], state: &WidgetState) {
    let country = state.selected_country();
    for item in items {
        let bullet = if state.is_item_selected(&item.id) { '*' } else { '-' };
        let _ = write!(out, "{:indent$}{bullet} {}", "", item.name);
        if let Some(details) = item.details_line() {
            let _ = write!(out, " ({details})");
        }
        if let Some(country) = country {
            let _ = write!(out, " [{country}]");
        }
        out.push('\n');
    }
}

/// Render the visible tree as indented text.
///
/// ```text
/// ▾ Enabling Capabilities
///     * Growth (Investment cases • GTM • Sales Hub • Knowledge mgmt) [Japan]
///     - Collaboratives [Japan]
/// ▸ Channels to Market
/// ```
pub fn outline(catalog: &Catalog, state: &WidgetState) -> String {
    let mut out = String::new();
    for section in &catalog.sections {
        let open = state.is_expanded(&ExpansionKey::section(&section.key));
        let _ = writeln!(out, "{} {}", marker(open), section.name);
        if !open {
            continue;
        }
        match &section.body {
            SectionBody::Flat(items) => write_items(&mut out, 4, items, state),
            SectionBody::Grouped(subs) => {
                for sub in subs {
                    let sub_open =
                        state.is_expanded(&ExpansionKey::subsection(&section.key, &sub.key));
                    let _ = writeln!(out, "  {} {}", marker(sub_open), sub.name);
                    if sub_open {
                        write_items(&mut out, 6, &sub.items, state);
                    }
                }
            }
        }
    }
    out
}
