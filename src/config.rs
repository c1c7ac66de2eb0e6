//! Application Configuration
//!
//! Read from the optional `window.__POKEDEX_CONFIG__` object; every field has a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{CatalogueError, CatalogueResult};

/// Global JS object the host page may define
pub const CONFIG_GLOBAL: &str = "__POKEDEX_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the Pokémon API; bundled data is used when unset
    pub api_url: Option<String>,
    /// Prepended to every page title
    pub title_prefix: String,
    /// Simulated round trip for bundled data
    pub latency_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            title_prefix: "Pokemon : ".to_string(),
            latency_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> CatalogueResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from the page global, defaults when it is absent
    pub fn from_window() -> CatalogueResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| CatalogueError::Config("no window".to_string()))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| CatalogueError::Config(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// API URL with blank values treated as unset
    pub fn api_url(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title_prefix, "Pokemon : ");
        assert_eq!(config.api_url(), None);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"apiUrl": "http://localhost:3000", "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.api_url(), Some("http://localhost:3000"));
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.latency_ms, 300);
        assert_eq!(config.title_prefix, "Pokemon : ");
    }

    #[test]
    fn test_blank_api_url_is_unset() {
        let config = AppConfig::from_json(r#"{"apiUrl": "  "}"#).unwrap();
        assert_eq!(config.api_url(), None);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = AppConfig::from_json(r#"{"logLevel": "loud"}"#).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(CatalogueError::Decode(_))));
    }
}
