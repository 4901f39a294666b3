//! Serializable configuration for [`crate::SearchInput`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Quiet period before a search value is committed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Query parameter written by default.
pub const DEFAULT_PARAM_KEY: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Debounced search synchronization settings.
pub struct SearchConfig {
    /// Query parameter receiving committed values.
    pub param_key: String,
    /// Trailing-edge debounce window in milliseconds.
    pub debounce_delay_ms: u64,
    /// Commit to the query parameter (`true`) or only to the local display.
    pub add_to_param: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            param_key: DEFAULT_PARAM_KEY.to_string(),
            debounce_delay_ms: DEFAULT_DEBOUNCE_MS,
            add_to_param: true,
        }
    }
}

impl SearchConfig {
    /// Debounce window as a [`Duration`].
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{ "add_to_param": false }"#).expect("parse config");
        assert_eq!(
            config,
            SearchConfig {
                param_key: "search".to_string(),
                debounce_delay_ms: 500,
                add_to_param: false,
            }
        );
    }

    #[test]
    fn delay_converts_to_duration() {
        let config = SearchConfig {
            debounce_delay_ms: 1250,
            ..SearchConfig::default()
        };
        assert_eq!(config.debounce_delay(), Duration::from_millis(1250));
    }
}
