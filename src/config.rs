use std::env;
use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let log_level = env::var("LOG_LEVEL")
            .map(|level| normalize_log_level(&level))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            host,
            port,
            log_level,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listening on: {}:{}", self.host, self.port);
        tracing::info!("  Log level: {}", self.log_level);
    }
}

/// Maps a LOG_LEVEL value onto a tracing level name. Unrecognized values
/// fall back to "info" rather than failing startup.
fn normalize_log_level(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        // "warning" is accepted as an alias some test harnesses send
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => DEFAULT_LOG_LEVEL,
    }
    .to_string()
}
