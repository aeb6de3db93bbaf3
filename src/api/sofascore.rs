use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::{
    api::utils::make_request,
    config::ApiConfig,
    models::{Endpoint, RequestDescriptor},
};

pub async fn get_player_detail(
    player_id: u64,
    client: &Client,
    config: &ApiConfig,
) -> Result<Value> {
    get_endpoint(Endpoint::PlayerDetail, player_id, client, config).await
}

pub async fn get_tournament_seasons(
    tournament_id: u64,
    client: &Client,
    config: &ApiConfig,
) -> Result<Value> {
    get_endpoint(Endpoint::TournamentSeasons, tournament_id, client, config).await
}

pub async fn get_endpoint(
    endpoint: Endpoint,
    id: u64,
    client: &Client,
    config: &ApiConfig,
) -> Result<Value> {
    let request = RequestDescriptor::new(config, endpoint.path())
        .with_param(endpoint.id_param(), &id.to_string());

    make_request(client, &request)
        .await
        .with_context(|| format!("Sofascore {} ({})", endpoint, id))
}

pub async fn get(
    path: &str,
    params: &[(String, String)],
    client: &Client,
    config: &ApiConfig,
) -> Result<Value> {
    let request = params
        .iter()
        .fold(RequestDescriptor::new(config, path), |request, (key, value)| {
            request.with_param(key, value)
        });

    make_request(client, &request)
        .await
        .with_context(|| format!("Sofascore ({})", path))
}
