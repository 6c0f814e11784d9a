//! Configuration module
//!
//! All settings come from the environment with sensible defaults, except the
//! Gemini API credential which is required: the process refuses to start
//! without it.

use std::env;

use anyhow::Context;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 25;
const DEFAULT_PROGRESS_TICK_MS: u64 = 20;
const DEFAULT_GEMINI_MODEL: &str = "models/gemini-1.5-pro";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Gemini API key (`GOOGLE_API_KEY`). Required.
    pub gemini_api_key: String,
    /// Model resource name, e.g. "models/gemini-1.5-pro".
    pub gemini_model: String,
    /// Override for the generative-language endpoint (tests, proxies).
    pub gemini_base_url: String,
    /// Upper bound on a whole upload body, in bytes.
    pub max_file_size_bytes: usize,
    /// Duration of one simulated-progress step; 100 steps per batch.
    pub progress_tick_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors_origins,
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("APP_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
            gemini_api_key: env::var("GOOGLE_API_KEY")
                .context("GOOGLE_API_KEY must be set")?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            max_file_size_bytes: env::var("MAX_FILE_SIZE_MB")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
                * 1024
                * 1024,
            progress_tick_ms: env::var("PROGRESS_TICK_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PROGRESS_TICK_MS),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            progress_tick_ms: DEFAULT_PROGRESS_TICK_MS,
        }
    }

    #[test]
    fn test_is_production() {
        let mut config = test_config();
        assert!(!config.is_production());

        config.environment = "production".to_string();
        assert!(config.is_production());

        config.environment = "PROD".to_string();
        assert!(config.is_production());
    }
}
