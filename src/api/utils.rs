use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::models::RequestDescriptor;

pub async fn make_request(client: &Client, request: &RequestDescriptor) -> Result<Value> {
    let url = request.url()?;
    debug!(
        path = %url.path(),
        query = url.query().unwrap_or(""),
        headers = ?request.header_names(),
        "sending request"
    );

    let mut builder = client.get(url);
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }

    let res = builder
        .send()
        .await
        .with_context(|| format!("Request to {} failed", request.path()))?;

    debug!(status = %res.status(), "received response");

    if !res.status().is_success() {
        return Err(Error::msg(format!(
            "Request failed: {} ({})",
            res.status(),
            request.path()
        )));
    }

    let text = res
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", request.path()))?;
    let data = serde_json::from_str::<Value>(&text)
        .with_context(|| format!("Failed to decode JSON response from {}", request.path()))?;

    Ok(data)
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
