//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Backend API configuration
    pub api: ApiConfig,
    /// UI preferences
    pub ui: UiConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the account API (e.g., "http://localhost:4000")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token sent with every request (optional)
    pub auth_token: Option<String>,
    /// Documentation page linked from the page description (optional)
    pub docs_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
            docs_url: None,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Display language; falls back to the system locale
    pub locale: Option<Locale>,
}

impl UiConfig {
    /// Configured locale, or the one detected from the system
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::from_system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://explorer.example.org"
            "#,
        )
        .expect("parse");
        assert_eq!(config.api.base_url, "https://explorer.example.org");
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.api.auth_token, None);
        assert_eq!(config.ui.locale, None);
    }

    #[test]
    fn test_explicit_locale_wins() {
        let ui = UiConfig {
            locale: Some(Locale::ZhCN),
        };
        assert_eq!(ui.effective_locale(), Locale::ZhCN);
    }
}
