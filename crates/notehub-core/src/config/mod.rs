//! Client configuration.
//!
//! Values come from environment variables (a workspace `.env` is loaded by
//! the binary before this runs). Every setting has a default except the API
//! token, which is optional.

use std::time::Duration;

use crate::error::{Error, Result};

/// Public NoteHub endpoint used when `NOTEHUB_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "https://notehub-public.goit.study/api";
/// Notes requested per page
pub const DEFAULT_PER_PAGE: u32 = 12;
/// Quiet period before a search term is committed
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

const ENV_API_URL: &str = "NOTEHUB_API_URL";
const ENV_TOKEN: &str = "NOTEHUB_TOKEN";
const ENV_PER_PAGE: &str = "NOTEHUB_PER_PAGE";
const ENV_DEBOUNCE_MS: &str = "NOTEHUB_SEARCH_DEBOUNCE_MS";
const ENV_THEME: &str = "NOTEHUB_THEME";

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Runtime configuration for the NoteHub client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Gateway base URL without a trailing slash
    pub api_base_url: String,
    /// Bearer token sent with every gateway request
    pub api_token: Option<String>,
    /// Page size sent as `perPage`
    pub per_page: u32,
    /// Search debounce window
    pub search_debounce: Duration,
    /// Appearance
    pub theme: ThemeMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            per_page: DEFAULT_PER_PAGE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            theme: ThemeMode::default(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank variables count as unset
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let api_base_url = match get(ENV_API_URL) {
            Some(url) => normalize_base_url(&url)?,
            None => defaults.api_base_url,
        };
        let per_page = match get(ENV_PER_PAGE) {
            Some(raw) => parse_per_page(&raw)?,
            None => defaults.per_page,
        };
        let search_debounce = match get(ENV_DEBOUNCE_MS) {
            Some(raw) => raw.parse::<u64>().map(Duration::from_millis).map_err(|_| {
                Error::Config(format!("{ENV_DEBOUNCE_MS} must be a number of milliseconds"))
            })?,
            None => defaults.search_debounce,
        };
        let theme = match get(ENV_THEME).as_deref() {
            None => defaults.theme,
            Some(raw) if raw.eq_ignore_ascii_case("light") => ThemeMode::Light,
            Some(raw) if raw.eq_ignore_ascii_case("dark") => ThemeMode::Dark,
            Some(raw) => {
                return Err(Error::Config(format!(
                    "{ENV_THEME} must be `light` or `dark`, got `{raw}`"
                )))
            }
        };

        Ok(Self {
            api_base_url,
            api_token: get(ENV_TOKEN),
            per_page,
            search_debounce,
            theme,
        })
    }
}

fn normalize_base_url(value: &str) -> Result<String> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(Error::Config(format!(
            "{ENV_API_URL} must start with http:// or https://"
        )));
    }
    Ok(value.trim_end_matches('/').to_string())
}

fn parse_per_page(raw: &str) -> Result<u32> {
    match raw.parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(Error::Config(format!(
            "{ENV_PER_PAGE} must be a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.per_page, 12);
        assert_eq!(config.search_debounce, Duration::from_millis(500));
    }

    #[test]
    fn overrides_are_applied() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("NOTEHUB_API_URL", "http://localhost:3000/api/"),
            ("NOTEHUB_TOKEN", " secret "),
            ("NOTEHUB_PER_PAGE", "20"),
            ("NOTEHUB_SEARCH_DEBOUNCE_MS", "250"),
            ("NOTEHUB_THEME", "Dark"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.per_page, 20);
        assert_eq!(config.search_debounce, Duration::from_millis(250));
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        let config = ClientConfig::from_lookup(lookup(&[("NOTEHUB_TOKEN", "   ")])).unwrap();
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ClientConfig::from_lookup(lookup(&[("NOTEHUB_API_URL", "notehub.local")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[("NOTEHUB_API_URL", "ftp://notehub.local")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[("NOTEHUB_PER_PAGE", "0")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[("NOTEHUB_PER_PAGE", "many")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[("NOTEHUB_THEME", "sepia")])).is_err());
    }
}
