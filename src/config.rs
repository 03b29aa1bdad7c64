//! Environment-driven configuration, loaded once at startup.

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Single origin allowed by the CORS policy (the frontend). When unset,
    /// no cross-origin requests are accepted.
    pub frontend_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "PORT",
                value: raw,
            })?,
            Err(_) => 4000,
        };
        let frontend_url = std::env::var("FRONTEND_URL").ok();
        Ok(Self {
            database_url,
            port,
            frontend_url,
        })
    }
}
