//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables with sensible
//! defaults, so the binary boots in development without a single variable
//! set. The webhook secret is the one knob that stays `None` when absent:
//! the revalidation endpoint fails closed without it.

use std::env;

/// Default public origin of the site; canonical URLs are built against it.
pub const DEFAULT_SITE_URL: &str = "https://www.clinicavidamed.com.br";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Public origin of the rendered site (scheme + host, no trailing slash)
    pub site_url: String,

    /// Shared secret for webhook signature verification.
    /// Absent secret is a fatal configuration error for the webhook path.
    pub revalidate_secret: Option<String>,

    /// CMS project identifier
    pub sanity_project_id: String,

    /// CMS dataset name
    pub sanity_dataset: String,

    /// CMS HTTP API version (date string)
    pub sanity_api_version: String,

    /// Read token; enables the draft/preview perspective
    pub sanity_token: Option<String>,

    /// Whether to query the CDN edge instead of the live API
    pub sanity_use_cdn: bool,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            site_url: env::var("SITE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),

            revalidate_secret: env::var("REVALIDATE_SECRET").ok(),

            sanity_project_id: env::var("SANITY_PROJECT_ID")
                .unwrap_or_else(|_| "vidamed".to_string()),

            sanity_dataset: env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string()),

            sanity_api_version: env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-05-01".to_string()),

            sanity_token: env::var("SANITY_TOKEN").ok(),

            sanity_use_cdn: env::var("SANITY_USE_CDN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

impl Default for Config {
    /// Baseline configuration, equal to `from_env()` with no variables set.
    /// Lets tests build an [`crate::web::AppState`] without touching the
    /// process environment.
    fn default() -> Self {
        Config {
            port: 8080,
            site_url: DEFAULT_SITE_URL.to_string(),
            revalidate_secret: None,
            sanity_project_id: "vidamed".to_string(),
            sanity_dataset: "production".to_string(),
            sanity_api_version: "2024-05-01".to_string(),
            sanity_token: None,
            sanity_use_cdn: true,
            request_timeout_ms: 8000,
        }
    }
}
