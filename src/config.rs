use crate::services::google_books::GOOGLE_BOOKS_URL;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source, so tests can avoid the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup("GOOGLE_BOOKS_API_KEY").unwrap_or_else(|| {
            warn!("GOOGLE_BOOKS_API_KEY is not set, upstream will reject searches");
            String::new()
        });

        let api_url = lookup("GOOGLE_BOOKS_API_URL").unwrap_or_else(|| GOOGLE_BOOKS_URL.to_string());

        Ok(Self {
            port,
            api_key,
            api_url,
        })
    }
}
