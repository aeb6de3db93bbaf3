use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct SofascoreSeasonsDto {
    seasons: Vec<SofascoreSeasonDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SofascoreSeasonDto {
    id: u64,
    name: String,
    year: String,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SofascorePlayerDetailDto {
    player: SofascorePlayerDto,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct SofascorePlayerDto {
    id: u64,
    name: String,
    short_name: Option<String>,
    position: Option<String>,
    jersey_number: Option<String>,
    height: Option<u32>,
    preferred_foot: Option<String>,
    team: Option<SofascoreTeamDto>,
    country: Option<SofascoreCountryDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SofascoreTeamDto {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SofascoreCountryDto {
    name: Option<String>,
}
