//! # operating-model
//!
//! Leptos renderer for the Consult operating model: a two-level tree of
//! collapsible sections with clickable capability items, a country filter
//! strip, horizontal scroll navigation and a detail modal.
//!
//! The same components run in two modes:
//!
//! - **`ssr`** (default) - [`render_widget`] and [`render_page`] produce static
//!   HTML snapshots for any [`WidgetState`]
//! - **`csr`** - the browser app in `web/` mounts [`components::OperatingModel`]
//!   and click handlers drive the state signal
//!
//! ## Quick Start
//!
//! ```rust
//! use operating_model::{render_page, Catalog, WidgetConfig, WidgetState};
//!
//! let catalog = Catalog::builtin();
//! let mut state = WidgetState::default();
//! state.toggle_section("ENABLING", None);
//! state.select_item(catalog.find_item("growth").unwrap());
//!
//! let html = render_page(&catalog, &WidgetConfig::default(), &state);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - sections, subsections, items, countries, expansion keys
//! - [`catalog`] - the built-in model and TOML loading
//! - [`state`] - expansion/selection state store
//! - [`layout`] - DOM-free view of what is visible
//! - [`scroll`] - viewport stepping
//! - [`config`] - widget settings
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod scroll;
pub mod state;
pub mod styles;
pub mod types;

pub use catalog::Catalog;
pub use config::WidgetConfig;
pub use error::ModelError;
pub use state::WidgetState;

#[cfg(feature = "ssr")]
use components::OperatingModel;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the widget for `state` as an HTML fragment.
///
/// Click handlers are not attached; the fragment is a snapshot.
#[cfg(feature = "ssr")]
pub fn render_widget(catalog: &Catalog, config: &WidgetConfig, state: &WidgetState) -> String {
    let view = view! {
        <OperatingModel catalog=catalog.clone() config=config.clone() initial=state.clone() />
    };
    view.to_html()
}

/// Render a standalone HTML page (with embedded CSS) containing the widget.
#[cfg(feature = "ssr")]
pub fn render_page(catalog: &Catalog, config: &WidgetConfig, state: &WidgetState) -> String {
    let title = config.title.trim_end_matches(':').to_string();
    let page = view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{styles::WIDGET_CSS}</style>
            </head>
            <body>
                <OperatingModel catalog=catalog.clone() config=config.clone() initial=state.clone() />
            </body>
        </html>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", page.to_html())
}
