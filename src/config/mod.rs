//! Configuration module for the PESCE backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Default cap on multipart upload bodies (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per content type
    pub data_dir: PathBuf,
    /// Directory served as static files; uploads land under `images/`
    pub public_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Admin login name
    pub admin_username: String,
    /// Admin password (login is disabled when unset)
    pub admin_password: Option<String>,
    /// HMAC secret for signing admin tokens
    pub token_secret: Option<String>,
    /// Maximum accepted upload body size in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("PESCE_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let public_dir = env::var("PESCE_PUBLIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let bind_addr = env::var("PESCE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("PESCE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("PESCE_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(LogFormat::Pretty);

        let admin_username =
            env::var("PESCE_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

        let admin_password = env::var("PESCE_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let token_secret = env::var("PESCE_TOKEN_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let max_upload_bytes = env::var("PESCE_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self {
            data_dir,
            public_dir,
            bind_addr,
            log_level,
            log_format,
            admin_username,
            admin_password,
            token_secret,
            max_upload_bytes,
        })
    }
}
