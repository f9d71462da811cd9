//! Server configuration from environment variables.

use anyhow::{Context, Result};

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// SQLite connection URL
    pub database_url: String,

    /// Upload size cap in bytes
    pub max_upload_bytes: usize,

    /// Concurrent extraction/comparison permits
    pub extract_workers: usize,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: env_or("PORT", 5000)?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:documents.db?mode=rwc".to_owned()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 16 * 1024 * 1024)?,
            extract_workers: env_or("EXTRACT_WORKERS", 4)?,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid value for {key}")),
        Err(_) => Ok(default),
    }
}
