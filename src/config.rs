//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Directory holding the local JSON store
    pub data_dir: String,
    /// Server port
    pub port: u16,

    /// Stormglass marine weather API base URL
    pub stormglass_url: String,
    /// Stormglass API key
    pub stormglass_api_key: String,

    /// Object storage base URL (photo uploads)
    pub storage_url: String,
    /// Object storage bucket for session photos
    pub storage_bucket: String,
    /// Object storage API key
    pub storage_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// For local development a `.env` file is honored. Only the API keys
    /// are required; everything else has a sensible default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),

            stormglass_url: env::var("STORMGLASS_URL")
                .unwrap_or_else(|_| "https://api.stormglass.io/v2".to_string()),
            stormglass_api_key: env::var("STORMGLASS_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STORMGLASS_API_KEY"))?,

            storage_url: env::var("STORAGE_URL")
                .unwrap_or_else(|_| "http://localhost:54321/storage/v1".to_string()),
            storage_bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "session-photos".to_string()),
            storage_api_key: env::var("STORAGE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STORAGE_API_KEY"))?,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            data_dir: "data".to_string(),
            port: 8080,
            stormglass_url: "http://127.0.0.1:9".to_string(),
            stormglass_api_key: "test_stormglass_key".to_string(),
            storage_url: "http://127.0.0.1:9/storage/v1".to_string(),
            storage_bucket: "test-photos".to_string(),
            storage_api_key: "test_storage_key".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
