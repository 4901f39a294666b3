mod persistence;
mod web_app;

pub use persistence::{load_catalog_state, save_catalog_state, CATALOG_STATE_KEY};
pub use web_app::{CatalogEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
