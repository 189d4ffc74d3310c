//! Application Configuration
//!
//! The browser has no process environment, so overrides are baked in at
//! build time (`SURVEY_API_URL=... trunk build`).

use reqwest::Url;
use tracing::{info, warn, Level};

/// Backend origin used when no override is given
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, no trailing slash
    pub api_base_url: String,
}

impl AppConfig {
    /// Read the build-time overrides. Call after logging is up so bad values get reported.
    pub fn load() -> Self {
        Self::from_values(option_env!("SURVEY_API_URL"))
    }

    pub fn from_values(api_url: Option<&str>) -> Self {
        Self {
            api_base_url: resolve_api_url(api_url),
        }
    }
}

/// Max log level from `SURVEY_LOG_LEVEL`; needed before the logger exists.
pub fn log_level() -> Level {
    parse_log_level(option_env!("SURVEY_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}

fn resolve_api_url(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        info!("SURVEY_API_URL not set, using default: {DEFAULT_API_URL}");
        return DEFAULT_API_URL.to_string();
    };
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => raw.trim_end_matches('/').to_string(),
        Ok(url) => {
            warn!("SURVEY_API_URL has unsupported scheme {:?}, using default", url.scheme());
            DEFAULT_API_URL.to_string()
        }
        Err(e) => {
            warn!("Invalid SURVEY_API_URL value {raw:?}: {e}, using default");
            DEFAULT_API_URL.to_string()
        }
    }
}
