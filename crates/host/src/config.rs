use std::path::PathBuf;

use crate::error::HostError;

const DEFAULT_PORT: u16 = 3000;

/// Host settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    /// Built frontend (`index.html` plus hashed bundles under `assets/`).
    pub dist_dir: PathBuf,
    /// Hand-maintained static files: map image, stylesheet.
    pub assets_dir: PathBuf,
    /// Dataset served to the page as `service_centers.json`.
    pub data_path: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| HostError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let path = |key: &str, default: &str| {
            PathBuf::from(get(key).unwrap_or_else(|| default.to_string()))
        };
        Ok(HostConfig {
            port,
            dist_dir: path("DIST_DIR", "dist"),
            assets_dir: path("ASSETS_DIR", "assets"),
            data_path: path("DATA_PATH", "assets/service_centers.json"),
        })
    }
}
