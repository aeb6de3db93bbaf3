use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://sofascore.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "sofascore.p.rapidapi.com";

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const API_HOST_VAR: &str = "RAPIDAPI_HOST";
pub const BASE_URL_VAR: &str = "SOFASCORE_BASE_URL";

#[derive(Clone, Getters, new)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
    api_host: String,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Values in the file take precedence over the process environment.
    /// The file is parsed only; nothing is exported into the environment.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let mut vars = HashMap::new();
        let iter = dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open env file {}", path.display()))?;

        for item in iter {
            let (key, value) = item
                .with_context(|| format!("Failed to parse env file {}", path.display()))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|name| {
            vars.get(name)
                .filter(|value| !value.trim().is_empty())
                .cloned()
                .or_else(|| std::env::var(name).ok())
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR)
            .with_context(|| format!("Missing {} in environment", API_KEY_VAR))?;
        let api_host = non_empty(API_HOST_VAR).unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let base_url = non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(base_url, api_key, api_host))
    }
}

/// Loads `./.env` (or the first one found in a parent directory) into the
/// process environment. A missing file is fine; a malformed one is an error.
pub fn load_dotenv() -> Result<()> {
    loaded(dotenv::dotenv())
}

pub fn load_dotenv_from(path: &Path) -> Result<()> {
    loaded(dotenv::from_path(path).map(|_| path.to_path_buf()))
}

fn loaded(result: dotenv::Result<PathBuf>) -> Result<()> {
    match result {
        Ok(path) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}
