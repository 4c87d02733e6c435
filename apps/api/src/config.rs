use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, but a malformed number fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// Session backend. `None` keeps sessions in process memory.
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    pub session_cookie: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalog_path: PathBuf::from(env_or("CATALOG_PATH", "data/roles.json")),
            redis_url: optional_env("REDIS_URL"),
            session_ttl_secs: env_or("SESSION_TTL_SECS", "86400")
                .parse::<u64>()
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            session_cookie: env_or("SESSION_COOKIE", "skillbridge_sid"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
