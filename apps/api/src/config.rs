use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible local default, so the service runs
/// out of the box against `./data` and `./uploads`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON store files (users, payments, reports).
    pub data_dir: PathBuf,
    /// Directory where payment-proof screenshots are written and served from.
    pub uploads_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            uploads_dir: PathBuf::from(env_or("UPLOADS_DIR", "uploads/payment_proofs")),
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
