use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_catalog::CatalogApp;

use crate::persistence::{load_catalog_state, save_catalog_state};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Component Catalog" />
        <Meta name="description" content="Visual catalog of the ui_kit component set." />

        <Router>
            <Routes>
                <Route path="" view=CatalogEntry />
            </Routes>
        </Router>
    }
}

#[component]
pub fn CatalogEntry() -> impl IntoView {
    let on_state_change = Callback::new(|state: serde_json::Value| {
        if let Err(err) = save_catalog_state(&state) {
            logging::warn!("catalog state save failed: {err}");
        }
    });

    match load_catalog_state() {
        Some(restored_state) => view! {
            <CatalogApp restored_state=restored_state on_state_change=on_state_change />
        }
        .into_view(),
        None => view! { <CatalogApp on_state_change=on_state_change /> }.into_view(),
    }
}
