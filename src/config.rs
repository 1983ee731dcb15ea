//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Default backend address (the estimator service's development port)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "Data Breach Impact Calculator";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,
    /// Window configuration
    pub window: WindowConfig,
}

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to (no trailing slash)
    pub base_url: String,
}

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Title shown in the window decoration
    pub title: String,
    /// Initial inner size in points
    pub inner_size: [f32; 2],
    /// Minimum inner size in points
    pub min_inner_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
            window: WindowConfig {
                title: DEFAULT_WINDOW_TITLE.to_string(),
                inner_size: [1200.0, 800.0],
                min_inner_size: [900.0, 600.0],
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api: ApiConfig {
                base_url: env::var("BREACH_API_URL")
                    .ok()
                    .map(|url| normalize_base_url(&url))
                    .filter(|url| !url.is_empty())
                    .unwrap_or(defaults.api.base_url),
            },
            window: WindowConfig {
                title: env::var("BREACH_WINDOW_TITLE")
                    .ok()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or(defaults.window.title),
                ..defaults.window
            },
        }
    }
}

/// Strip surrounding whitespace and trailing slashes so paths can be appended
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
