//! Runtime configuration
//!
//! Resolved once at startup and handed to the lookup client and handlers
//! through `AppState`. Request handling never reads the environment.

use std::time::Duration;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://serpapi.com";
pub const DEFAULT_COMPANY_NAME: &str = "Company Name";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SerpApi key. An empty key is allowed; lookups then fail upstream.
    pub api_key: String,
    /// Base URL of the patent search service, without trailing slash
    pub search_base_url: String,
    /// Name printed on the cover page of exported charts
    pub company_name: String,
    pub port: u16,
    pub lookup_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            port: DEFAULT_PORT,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup("API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("API_KEY is not set; patent lookups will be rejected upstream");
        }

        let search_base_url = lookup("SERPAPI_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.search_base_url);

        let company_name = lookup("COMPANY_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.company_name);

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let lookup_timeout = lookup("LOOKUP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.lookup_timeout);

        Self {
            api_key,
            search_base_url,
            company_name,
            port,
            lookup_timeout,
        }
    }
}
