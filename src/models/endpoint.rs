use strum_macros::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum Endpoint {
    PlayerDetail,
    TournamentSeasons,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PlayerDetail => "players/detail",
            Endpoint::TournamentSeasons => "tournaments/get-seasons",
        }
    }

    /// Name of the query parameter carrying the entity identifier.
    pub fn id_param(&self) -> &'static str {
        match self {
            Endpoint::PlayerDetail => "playerId",
            Endpoint::TournamentSeasons => "tournamentId",
        }
    }

    pub fn default_id(&self) -> u64 {
        match self {
            Endpoint::PlayerDetail => 750,
            Endpoint::TournamentSeasons => 17,
        }
    }
}
