use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("BOOKS_DB_PATH")
            .unwrap_or_else(|| "db.json".to_string())
            .into();

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            db_path,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Books database: {}", self.db_path.display());
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
