//! Leptos UI components for the operating model widget.
//!
//! # Component Hierarchy
//!
//! ```text
//! OperatingModel
//! ├── scroll buttons (previous / next)
//! ├── CountryStrip
//! ├── SectionView (per section)
//! │   ├── flat:    ItemGrid
//! │   └── grouped: SubsectionView (per subsection)
//! │                └── ItemGrid
//! └── DetailModal (while an item is selected)
//! ```
//!
//! Every component takes the widget's `RwSignal<WidgetState>` and writes to
//! it from click handlers; nothing else is shared between components.

mod countries;
mod detail;
mod icons;
mod items;
mod section;
mod widget;

pub use countries::CountryStrip;
pub use detail::{DetailModal, detail_heading};
pub use icons::*;
pub use items::ItemGrid;
pub use section::SectionView;
pub use widget::OperatingModel;
