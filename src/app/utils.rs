use anyhow::{Result, anyhow};
use strum::IntoEnumIterator;

use crate::models::Endpoint;

/// Parses a `key=value` query argument. Only the first `=` splits.
pub fn parse_param(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(anyhow!("Invalid query parameter '{}', expected key=value", arg)),
    }
}

pub fn list_endpoints() -> String {
    Endpoint::iter()
        .map(|endpoint| {
            format!(
                "{}\t/{}?{}={}",
                endpoint,
                endpoint.path(),
                endpoint.id_param(),
                endpoint.default_id()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
