//! Runtime configuration, injected by the hosting page as `window.ENV`.
//!
//! Both `UPPER_CASE` (documented) and `lower_case` keys are accepted.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:3000";
pub(crate) const DEFAULT_PAGE_SIZE: usize = 10;
pub(crate) const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 400;
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EnvConfig {
    /// Backend origin. Requests go to `<api_url>/api/...`.
    pub api_url: String,
    /// Rows per page on every list view.
    pub page_size: usize,
    /// Quiet interval before a search box change is fetched.
    pub search_debounce_ms: u32,
    /// Serve illustrative data instead of calling the backend.
    pub demo_mode: bool,
    /// `tracing` filter directive (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            demo_mode: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl EnvConfig {
    /// Reads `window.ENV`. Without an `API_URL` the page's own origin is used, so
    /// `/api/*` reaches the backend through the serving proxy.
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let mut config = Self::from_lookup(|key| {
            let env = env.as_ref()?;
            let v = js_sys::Reflect::get(env, &key.into()).ok()?;
            if v.is_undefined() || v.is_null() {
                return None;
            }
            v.as_string()
                .or_else(|| v.as_f64().map(|n| n.to_string()))
                .or_else(|| v.as_bool().map(|b| b.to_string()))
        });

        let has_explicit_url = config.api_url != DEFAULT_API_URL;
        if !has_explicit_url {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                config.api_url = origin;
            }
        }

        config
    }

    /// Builds the config from a key lookup; bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| -> Option<String> {
            lookup(name)
                .or_else(|| lookup(&name.to_lowercase()))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let api_url = get("API_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let page_size = match get("PAGE_SIZE").map(|v| v.parse::<f64>()) {
            None => defaults.page_size,
            Some(Ok(n)) if n >= 1.0 && n.fract() == 0.0 => n as usize,
            Some(_) => {
                tracing::warn!("invalid PAGE_SIZE, using {}", defaults.page_size);
                defaults.page_size
            }
        };

        let search_debounce_ms = match get("SEARCH_DEBOUNCE_MS").map(|v| v.parse::<f64>()) {
            None => defaults.search_debounce_ms,
            Some(Ok(n)) if (0.0..=10_000.0).contains(&n) => n as u32,
            Some(_) => {
                tracing::warn!(
                    "invalid SEARCH_DEBOUNCE_MS, using {}",
                    defaults.search_debounce_ms
                );
                defaults.search_debounce_ms
            }
        };

        let demo_mode = match get("DEMO_MODE").map(|v| v.to_lowercase()) {
            None => defaults.demo_mode,
            Some(v) => matches!(v.as_str(), "1" | "true" | "yes" | "on"),
        };

        let log_level = get("LOG_LEVEL").unwrap_or(defaults.log_level);

        Self {
            api_url,
            page_size,
            search_debounce_ms,
            demo_mode,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = EnvConfig::from_lookup(|_| None);
        assert_eq!(config, EnvConfig::default());
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 400);
        assert!(!config.demo_mode);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_upper_case_preferred_over_lower_case() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("API_URL", "https://admin.example.com/"),
            ("api_url", "https://legacy.example.com"),
            ("page_size", "25"),
            ("DEMO_MODE", "TRUE"),
            ("log_level", "debug"),
        ]));
        assert_eq!(config.api_url, "https://admin.example.com");
        assert_eq!(config.page_size, 25);
        assert!(config.demo_mode);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("PAGE_SIZE", "0"),
            ("SEARCH_DEBOUNCE_MS", "soon"),
            ("DEMO_MODE", "nope"),
            ("API_URL", "   "),
        ]));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce_ms, 400);
        assert!(!config.demo_mode);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config = EnvConfig::from_lookup(lookup(&[("PAGE_SIZE", "2.5")]));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_numeric_values_from_js_numbers() {
        // Numbers read from `window.ENV` arrive formatted by f64::to_string.
        let config = EnvConfig::from_lookup(lookup(&[
            ("PAGE_SIZE", "50"),
            ("SEARCH_DEBOUNCE_MS", "300"),
        ]));
        assert_eq!(config.page_size, 50);
        assert_eq!(config.search_debounce_ms, 300);
    }
}
