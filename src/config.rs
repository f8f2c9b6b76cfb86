use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "blog.toml";

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub server: ServerConfig,
    pub content: ContentConfig,
}

/// Branding of the site; the only thing that differs between variants.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub title: String,
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Edge Blog".to_string(),
            title: "Next.js Edge Blog".to_string(),
            description: "A simple blog built with Next.js and Edge Runtime".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Simulated latency of the JSON API, in milliseconds.
    pub api_delay_ms: u64,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_delay_ms: 300,
            static_dir: PathBuf::from("content/static"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    #[default]
    Builtin,
    Directory,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ContentConfig {
    pub source: ContentSource,
    pub dir: PathBuf,
    /// Escape HTML in post bodies before formatting.
    pub escape_html: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSource::Builtin,
            dir: PathBuf::from("content/posts"),
            escape_html: false,
        }
    }
}

impl Config {
    pub fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if it exists, otherwise falls back to defaults, then
    /// applies `PORT` from the environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            info!(path = %path.display(), "loading config");
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::parse(&raw, path)?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_env(std::env::var("PORT").ok().as_deref());
        Ok(config)
    }

    fn apply_env(&mut self, port: Option<&str>) {
        if let Some(port) = port.and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }
}
