// Operating model widget, browser build (trunk serve)

use leptos::prelude::*;
use operating_model::components::OperatingModel;
use operating_model::styles::WIDGET_CSS;
use operating_model::Catalog;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{WIDGET_CSS}</style>
        <main>
            <OperatingModel catalog=Catalog::builtin() />
        </main>
    }
}
