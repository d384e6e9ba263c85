//! Collapsible section and subsection boxes.
//!
//! Flat sections indent their item grid by one header width; grouped sections
//! indent their subsection headers a little and each subsection indents its
//! own grid by one header width.

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, ICON_CARET_UP, Icon, ItemGrid};
use crate::state::WidgetState;
use crate::types::{ExpansionKey, Section, SectionBody, Subsection};

const SUBSECTION_TEXT: &str = "#ffffff";

fn chip_style(background: &str, text: &str) -> String {
    format!("background-color: {}; color: {}", background, text)
}

/// Clickable header: colored name chip, chevron and dashed leader line.
#[component]
fn HeaderRow(
    key: ExpansionKey,
    name: String,
    chip_style: String,
    state: RwSignal<WidgetState>,
) -> impl IntoView {
    let data_key = key.to_string();
    let is_open = {
        let key = key.clone();
        Signal::derive(move || state.with(|s| s.is_expanded(&key)))
    };
    let toggle = move |_| state.update(|s| s.toggle(key.clone()));

    view! {
        <div
            class="om-header-row"
            data-key=data_key
            data-expanded=move || is_open.get().to_string()
            on:click=toggle
        >
            <div class="om-header-chip" style=chip_style>
                <span>{name}</span>
                {move || {
                    let caret = if is_open.get() { ICON_CARET_UP } else { ICON_CARET_DOWN };
                    view! { <Icon path=caret size="16" /> }
                }}
            </div>
            <div class="om-leader"></div>
        </div>
    }
}

/// Second-level header with its own item grid.
#[component]
fn SubsectionView(
    section_key: String,
    subsection: Subsection,
    state: RwSignal<WidgetState>,
    grid_style: String,
) -> impl IntoView {
    let key = ExpansionKey::subsection(&section_key, &subsection.key);
    let is_open = {
        let key = key.clone();
        Signal::derive(move || state.with(|s| s.is_expanded(&key)))
    };
    let items = subsection.items;

    view! {
        <div class="om-subsection">
            <HeaderRow
                key=key
                name=subsection.name
                chip_style=chip_style(&subsection.color, SUBSECTION_TEXT)
                state=state
            />
            {move || is_open.get().then(|| view! {
                <div class="om-subsection-body">
                    <ItemGrid items=items.clone() state=state grid_style=grid_style.clone() />
                </div>
            })}
        </div>
    }
}

/// One top-level section box. Branches on the body layout.
#[component]
pub fn SectionView(
    section: Section,
    state: RwSignal<WidgetState>,
    /// Inline style for item grids (column template)
    grid_style: String,
) -> impl IntoView {
    let key = ExpansionKey::section(&section.key);
    let is_open = {
        let key = key.clone();
        Signal::derive(move || state.with(|s| s.is_expanded(&key)))
    };
    let box_style = section
        .palette
        .background
        .as_deref()
        .map(|bg| format!("background-color: {}", bg))
        .unwrap_or_default();
    let body_class = if section.is_grouped() {
        "om-body om-body-grouped"
    } else {
        "om-body om-body-flat"
    };
    let section_key = section.key.clone();
    let body = section.body;

    view! {
        <div class="om-section" style=box_style data-section=section.key>
            <HeaderRow
                key=key
                name=section.name
                chip_style=chip_style(&section.palette.color, &section.palette.text_color)
                state=state
            />
            {move || is_open.get().then(|| {
                let content = match body.clone() {
                    SectionBody::Flat(items) => view! {
                        <ItemGrid items=items state=state grid_style=grid_style.clone() />
                    }
                    .into_any(),
                    SectionBody::Grouped(subsections) => subsections
                        .into_iter()
                        .map(|subsection| view! {
                            <SubsectionView
                                section_key=section_key.clone()
                                subsection=subsection
                                state=state
                                grid_style=grid_style.clone()
                            />
                        })
                        .collect_view()
                        .into_any(),
                };
                view! { <div class=body_class>{content}</div> }
            })}
        </div>
    }
}
