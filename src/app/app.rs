use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::{
    api::sofascore,
    app::output::{OutputFormat, render},
    config::ApiConfig,
    models::Endpoint,
};

pub struct App {
    client: Client,
    config: ApiConfig,
    format: OutputFormat,
}

impl App {
    pub fn new(config: ApiConfig, format: OutputFormat, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            config,
            format,
        })
    }

    pub async fn fetch_endpoint(&self, endpoint: Endpoint, id: u64) -> Result<String> {
        let value = sofascore::get_endpoint(endpoint, id, &self.client, &self.config).await?;
        render(&value, self.format, Some(endpoint))
    }

    pub async fn fetch_path(&self, path: &str, params: &[(String, String)]) -> Result<String> {
        let value = sofascore::get(path, params, &self.client, &self.config).await?;
        render(&value, self.format, None)
    }
}
