use std::collections::BTreeMap;

use anyhow::{Context, Result};
use derive_getters::Getters;
use reqwest::Url;

use crate::config::ApiConfig;

pub const API_KEY_HEADER: &str = "x-rapidapi-key";
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Everything needed to issue one GET request. The two RapidAPI headers are
/// always present since the only constructor inserts them.
#[derive(Clone, Getters)]
pub struct RequestDescriptor {
    base_url: String,
    path: String,
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl RequestDescriptor {
    pub fn new(config: &ApiConfig, path: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(API_KEY_HEADER.to_string(), config.api_key().clone());
        headers.insert(API_HOST_HEADER.to_string(), config.api_host().clone());

        Self {
            base_url: config.base_url().clone(),
            path: path.trim_start_matches('/').to_string(),
            query: BTreeMap::new(),
            headers,
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.keys().map(String::as_str).collect()
    }

    pub fn url(&self) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), self.path);
        let mut url =
            Url::parse(&raw).with_context(|| format!("Invalid request URL '{}'", raw))?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }
}
