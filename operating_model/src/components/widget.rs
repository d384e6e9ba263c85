//! The top-level operating model widget.

use leptos::html;
use leptos::prelude::*;
use tracing::debug;

use super::{CountryStrip, DetailModal, ICON_CARET_LEFT, ICON_CARET_RIGHT, Icon, SectionView};
use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::scroll::ScrollDirection;
use crate::state::WidgetState;

/// Header, scroll buttons, country strip, section list and detail modal.
///
/// The widget owns its state signal; `initial` lets callers start from a
/// pre-built state (the static renderer uses this for snapshots).
#[component]
pub fn OperatingModel(
    catalog: Catalog,
    #[prop(optional)] config: WidgetConfig,
    #[prop(optional)] initial: WidgetState,
) -> impl IntoView {
    let state = RwSignal::new(initial);
    let viewport: NodeRef<html::Div> = NodeRef::new();
    let step = config.scroll_step;

    let scroll = move |direction: ScrollDirection| {
        if let Some(el) = viewport.get_untracked() {
            let target = direction.apply(el.scroll_left(), step);
            el.set_scroll_left(target);
            debug!(?direction, target, "scrolled viewport");
        }
    };

    let grid_style = config.grid_template();
    let placeholders = config.placeholders;

    let detail = move || {
        let selected = state.with(|s| s.selected_item().cloned().map(|item| (item, s.selected_country())));
        selected.map(|(item, country)| view! {
            <DetailModal
                item=item
                country=country
                placeholders=placeholders.clone()
                state=state
            />
        })
    };

    view! {
        <div class="om-widget">
            <div class="om-header">
                <div class="om-header-line">
                    <h1 class="om-title">{config.title}</h1>
                    <span class="om-tagline">{config.tagline}</span>
                </div>
            </div>

            <div class="om-stage">
                <button
                    type="button"
                    class="om-scroll-btn om-scroll-prev"
                    title=ScrollDirection::Previous.label()
                    on:click=move |_| scroll(ScrollDirection::Previous)
                >
                    <Icon path=ICON_CARET_LEFT size="24" />
                </button>
                <button
                    type="button"
                    class="om-scroll-btn om-scroll-next"
                    title=ScrollDirection::Next.label()
                    on:click=move |_| scroll(ScrollDirection::Next)
                >
                    <Icon path=ICON_CARET_RIGHT size="24" />
                </button>

                <div class="om-viewport" node_ref=viewport>
                    <div class="om-canvas">
                        <CountryStrip state=state />
                        <div class="om-sections">
                            {catalog
                                .sections
                                .into_iter()
                                .map(|section| view! {
                                    <SectionView section=section state=state grid_style=grid_style.clone() />
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            {detail}
        </div>
    }
}
