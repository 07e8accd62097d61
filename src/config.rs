use crate::open_library::models::{DEFAULT_API_BASE_URL, DEFAULT_COVERS_BASE_URL};
use crate::open_library::LinkBases;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info};

pub const API_BASE_URL_VAR: &str = "BOOK_FINDER_API_BASE_URL";
pub const COVERS_BASE_URL_VAR: &str = "BOOK_FINDER_COVERS_BASE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} is not a valid URL ({value}): {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Open Library site, used for `/search.json` and for detail links
    pub api_base_url: String,
    /// Cover image host
    pub covers_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            covers_base_url: DEFAULT_COVERS_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                debug!("No .env file found");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source; unset or blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = read_url(&lookup, API_BASE_URL_VAR, defaults.api_base_url)?;
        let covers_base_url = read_url(&lookup, COVERS_BASE_URL_VAR, defaults.covers_base_url)?;

        info!(
            "Using Open Library at {} (covers: {})",
            api_base_url, covers_base_url
        );

        Ok(Self {
            api_base_url,
            covers_base_url,
        })
    }

    pub fn links(&self) -> LinkBases {
        LinkBases {
            site: self.api_base_url.clone(),
            covers: self.covers_base_url.clone(),
        }
    }
}

fn read_url<F>(lookup: &F, name: &'static str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match lookup(name) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => return Ok(default),
    };

    Url::parse(&value).map_err(|e| ConfigError::InvalidUrl {
        name,
        value: value.clone(),
        reason: e.to_string(),
    })?;

    Ok(value.trim_end_matches('/').to_string())
}
