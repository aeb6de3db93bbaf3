use std::{path::PathBuf, time::Duration};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use sofascore_cli::{
    app::{App, OutputFormat, utils},
    config::{self, ApiConfig},
    models::Endpoint,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sofascore", author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Print indented JSON
    #[clap(long, global = true, conflicts_with = "summary")]
    pretty: bool,

    /// Print a short human-readable summary for known endpoints
    #[clap(long, global = true)]
    summary: bool,

    /// Read RAPIDAPI_KEY and friends from this file instead of ./.env
    #[clap(long, global = true)]
    env_file: Option<String>,

    /// Request timeout in seconds
    #[clap(long, global = true, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Player details
    PlayerDetail {
        #[clap(long, default_value_t = Endpoint::PlayerDetail.default_id())]
        player_id: u64,
    },
    /// Seasons of a tournament
    TournamentSeasons {
        #[clap(long, default_value_t = Endpoint::TournamentSeasons.default_id())]
        tournament_id: u64,
    },
    /// GET an arbitrary path
    Get {
        path: String,
        /// Query parameter as key=value, repeatable
        #[clap(short = 'q', long = "query", value_parser = parse_query)]
        query: Vec<(String, String)>,
    },
    /// List known endpoints
    Endpoints,
}

fn parse_query(arg: &str) -> Result<(String, String), String> {
    utils::parse_param(arg).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let load_config = || -> Result<ApiConfig> {
        match &cli.env_file {
            Some(path) => {
                let path = PathBuf::from(shellexpand::tilde(path).into_owned());
                ApiConfig::from_env_file(&path)
            }
            None => {
                config::load_dotenv()?;
                ApiConfig::from_env()
            }
        }
    };

    let format = match (cli.pretty, cli.summary) {
        (true, _) => OutputFormat::Pretty,
        (_, true) => OutputFormat::Summary,
        _ => OutputFormat::Compact,
    };
    let timeout = Duration::from_secs(cli.timeout);

    let output = match &cli.command {
        Command::Endpoints => utils::list_endpoints(),
        Command::PlayerDetail { player_id } => {
            App::new(load_config()?, format, timeout)?
                .fetch_endpoint(Endpoint::PlayerDetail, *player_id)
                .await?
        }
        Command::TournamentSeasons { tournament_id } => {
            App::new(load_config()?, format, timeout)?
                .fetch_endpoint(Endpoint::TournamentSeasons, *tournament_id)
                .await?
        }
        Command::Get { path, query } => {
            if path.trim_matches('/').is_empty() {
                return Err(anyhow!("Path must not be empty"));
            }
            App::new(load_config()?, format, timeout)?
                .fetch_path(path, query)
                .await?
        }
    };

    println!("{}", output);

    Ok(())
}
