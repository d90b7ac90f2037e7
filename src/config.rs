//! Server configuration from environment variables.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Runtime configuration. `DATABASE_URL` is required; `FRONTEND_URL` is the
/// single origin the CORS layer accepts; `PORT` defaults to 4000.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub frontend_url: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 4000,
        };
        Ok(Self {
            database_url,
            frontend_url,
            port,
        })
    }
}
