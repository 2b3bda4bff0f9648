//! Configuration module for loading environment variables and settings.

use crate::error::ConfigError;

/// Default base URL for the Video Jungle API.
pub const DEFAULT_API_BASE: &str = "https://api.video-jungle.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Video Jungle API key (required)
    pub api_key: String,
    /// Base URL for the Video Jungle API
    pub api_base: String,
}

impl Config {
    /// Load configuration from environment variables and .env file.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvVar` if VJ_API_KEY is not set or is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_or_key(None)
    }

    /// Load configuration, preferring an explicitly supplied API key over the
    /// environment.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvVar` if no non-empty key is available
    /// from either source.
    pub fn from_env_or_key(api_key: Option<String>) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var("VJ_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .ok_or_else(|| ConfigError::MissingEnvVar("VJ_API_KEY".to_string()))?;

        let api_base =
            std::env::var("VJ_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self { api_key, api_base })
    }

    /// Create a configuration with an explicit key and base URL.
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into(),
        }
    }

    /// Build a full URL for an API path on the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
