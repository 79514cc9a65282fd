//! Command implementations for the MLB team stats CLI

pub mod fetch;
pub mod report;

use reqwest::Client;

use crate::cli::types::{Season, TeamId};
use crate::error::{Result, StatsError};
use crate::mlb::http::{load_or_fetch_teams, lookup_team, CacheStatus};
use crate::TEAM_ENV_VAR;

/// Resolve the target team name from the CLI flag or the environment.
pub fn resolve_team(team: Option<String>) -> Result<String> {
    match team {
        Some(t) => Ok(t),
        None => std::env::var(TEAM_ENV_VAR).map_err(|_| StatsError::MissingTeam {
            env_var: TEAM_ENV_VAR.to_string(),
        }),
    }
}

/// Context containing common resources needed by both commands
pub struct CommandContext {
    pub client: Client,
    /// Canonical team name from the MLB listing, not the user's input.
    /// Box-score side matching is exact, so this is the only spelling safe
    /// to extract with.
    pub team: String,
    pub team_id: TeamId,
    pub season: Season,
}

impl CommandContext {
    /// Resolve the team name to its MLB id and set up the HTTP client.
    pub async fn new(team: Option<String>, season: Season, verbose: bool) -> Result<Self> {
        let team = resolve_team(team)?;
        let client = Client::new();

        if verbose {
            println!("Loading MLB team listing...");
        }
        let (teams, status) = load_or_fetch_teams(&client, season, false).await?;
        if verbose && status == CacheStatus::Hit {
            println!("✓ Team listing loaded (from cache)");
        }
        let entry = lookup_team(&teams, &team)?;

        Ok(Self {
            client,
            team: entry.name,
            team_id: entry.id,
            season,
        })
    }
}
