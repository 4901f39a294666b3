//! `localStorage` persistence for the catalog's demo state.

use serde_json::Value;

/// Storage key holding the serialized catalog state.
pub const CATALOG_STATE_KEY: &str = "ui-catalog.state.v1";

/// Loads the saved catalog state, if any.
pub fn load_catalog_state() -> Option<Value> {
    let raw = load_raw(CATALOG_STATE_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Saves the catalog state.
///
/// # Errors
///
/// Returns an error when localStorage is unavailable or the write fails.
pub fn save_catalog_state(state: &Value) -> Result<(), String> {
    let raw = serde_json::to_string(state).map_err(|e| e.to_string())?;
    save_raw(CATALOG_STATE_KEY, &raw)
}

fn load_raw(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

fn save_raw(key: &str, raw: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()
            .ok_or_else(|| "localStorage unavailable".to_string())?
            .set_item(key, raw)
            .map_err(|e| format!("localStorage set_item failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, raw);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
