//! Configuration module for the Vynn dashboard.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token the development backend expects (auth disabled when unset)
    pub api_psk: Option<String>,
    /// Address the development backend binds to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Base URL the client talks to, including the `/api` prefix
    pub api_url: String,
    /// Bearer token the client attaches to every request
    pub api_token: Option<String>,
    /// Refetch the profile after every confirmed write
    pub refetch_after_persist: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("VYNN_API_PSK").ok();

        let bind_addr = env::var("VYNN_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("VYNN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_url = env::var("VYNN_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let api_token = env::var("VYNN_API_TOKEN").ok();

        let refetch_after_persist = env::var("VYNN_REFETCH_AFTER_PERSIST")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            api_psk,
            bind_addr,
            log_level,
            api_url,
            api_token,
            refetch_after_persist,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
