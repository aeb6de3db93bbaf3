use anyhow::Result;
use serde_json::Value;

use crate::{
    api::{
        sofascore_dto::{SofascorePlayerDetailDto, SofascoreSeasonsDto},
        utils::parse_response_object,
    },
    models::Endpoint,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Compact,
    Pretty,
    Summary,
}

/// Summary only applies to known endpoints; anything else is printed as compact JSON.
pub fn render(value: &Value, format: OutputFormat, endpoint: Option<Endpoint>) -> Result<String> {
    match (format, endpoint) {
        (OutputFormat::Pretty, _) => Ok(serde_json::to_string_pretty(value)?),
        (OutputFormat::Summary, Some(endpoint)) => summarize(endpoint, value),
        _ => Ok(value.to_string()),
    }
}

pub fn summarize(endpoint: Endpoint, value: &Value) -> Result<String> {
    match endpoint {
        Endpoint::TournamentSeasons => {
            let dto = parse_response_object::<SofascoreSeasonsDto>(
                value.clone(),
                "Failed to parse tournament seasons",
            )?;

            if dto.seasons().is_empty() {
                return Ok("No seasons found".to_string());
            }

            Ok(dto
                .seasons()
                .iter()
                .map(|season| format!("{}\t{}\t{}", season.id(), season.year(), season.name()))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Endpoint::PlayerDetail => {
            let dto = parse_response_object::<SofascorePlayerDetailDto>(
                value.clone(),
                "Failed to parse player detail",
            )?;
            let player = dto.player();

            let mut line = player.name().clone();
            if let Some(position) = player.position() {
                line.push_str(&format!(" ({})", position));
            }
            if let Some(jersey) = player.jersey_number() {
                line.push_str(&format!(" #{}", jersey));
            }
            if let Some(team) = player.team() {
                line.push_str(&format!(" - {}", team.name()));
            }
            if let Some(country) = player.country().as_ref().and_then(|c| c.name().clone()) {
                line.push_str(&format!(" - {}", country));
            }

            Ok(line)
        }
    }
}
