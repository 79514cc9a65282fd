//! HTTP access to the public MLB Stats API, fronted by the unified cache.
//!
//! Every endpoint has a `load_or_fetch_*` wrapper: cache first unless
//! `refresh` is set, then the network, writing the raw payload back to the
//! cache. Raw game feeds are the persisted artifacts the report command
//! aggregates from.

use reqwest::Client;
use serde_json::Value;

use crate::cli::types::{GamePk, Season, TeamId};
use crate::core::cache::{GameFeedCacheKey, ScheduleCacheKey, TeamsCacheKey, GLOBAL_CACHE};
use crate::error::{Result, StatsError};
use crate::mlb::types::{ScheduleEnvelope, Team, TeamsEnvelope};

/// Base path for the public MLB Stats API.
pub const STATS_API_BASE_URL: &str = "https://statsapi.mlb.com/api";

/// Where a document came from on this call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

async fn get_json(client: &Client, url: &str, params: &[(&str, String)]) -> Result<Value> {
    let res = client
        .get(url)
        .query(params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

pub async fn get_teams(client: &Client, season: Season) -> Result<Value> {
    let url = format!("{STATS_API_BASE_URL}/v1/teams");
    let params = [
        ("sportId", "1".to_string()),
        ("season", season.to_string()),
    ];
    get_json(client, &url, &params).await
}

pub async fn get_schedule(client: &Client, team_id: TeamId, season: Season) -> Result<Value> {
    let url = format!("{STATS_API_BASE_URL}/v1/schedule");
    let params = [
        ("sportId", "1".to_string()),
        ("teamId", team_id.to_string()),
        ("season", season.to_string()),
        ("gameType", "R".to_string()),
    ];
    get_json(client, &url, &params).await
}

pub async fn get_game_feed(client: &Client, game_pk: GamePk) -> Result<Value> {
    let url = format!("{STATS_API_BASE_URL}/v1.1/game/{}/feed/live", game_pk);
    get_json(client, &url, &[]).await
}

/// Load the season's team listing from cache, or fetch and cache it.
pub async fn load_or_fetch_teams(
    client: &Client,
    season: Season,
    refresh: bool,
) -> Result<(Vec<Team>, CacheStatus)> {
    let key = TeamsCacheKey { season };

    if !refresh {
        if let Some(raw) = GLOBAL_CACHE.teams.get(&key) {
            if let Ok(envelope) = serde_json::from_value::<TeamsEnvelope>(raw) {
                return Ok((envelope.teams, CacheStatus::Hit));
            }
        }
    }

    let raw = get_teams(client, season).await?;
    let envelope: TeamsEnvelope = serde_json::from_value(raw.clone())?;
    GLOBAL_CACHE.teams.put(key, raw);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((envelope.teams, status))
}

/// Load one team's schedule from cache, or fetch and cache it.
pub async fn load_or_fetch_schedule(
    client: &Client,
    team_id: TeamId,
    season: Season,
    refresh: bool,
) -> Result<(ScheduleEnvelope, CacheStatus)> {
    let key = ScheduleCacheKey { team_id, season };

    if !refresh {
        if let Some(raw) = GLOBAL_CACHE.schedule.get(&key) {
            if let Ok(envelope) = serde_json::from_value::<ScheduleEnvelope>(raw) {
                return Ok((envelope, CacheStatus::Hit));
            }
        }
    }

    let raw = get_schedule(client, team_id, season).await?;
    let envelope: ScheduleEnvelope = serde_json::from_value(raw.clone())?;
    GLOBAL_CACHE.schedule.put(key, raw);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((envelope, status))
}

/// Load one game's raw live-feed document from cache, or fetch and cache it.
///
/// The document is kept verbatim; extraction happens later so the cache
/// stays a faithful artifact of what the API returned.
pub async fn load_or_fetch_game_feed(
    client: &Client,
    game_pk: GamePk,
    refresh: bool,
) -> Result<(Value, CacheStatus)> {
    let key = GameFeedCacheKey { game_pk };

    if !refresh {
        if let Some(raw) = GLOBAL_CACHE.game_feed.get(&key) {
            return Ok((raw, CacheStatus::Hit));
        }
    }

    let raw = get_game_feed(client, game_pk).await?;
    GLOBAL_CACHE.game_feed.put(key, raw.clone());

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((raw, status))
}

/// Resolve a team name to its listing entry, case-insensitively.
///
/// The returned entry carries the listing's canonical spelling, which is
/// what box-score documents use; callers must compare against that, not the
/// user's input.
pub fn lookup_team(teams: &[Team], name: &str) -> Result<Team> {
    if teams.is_empty() {
        return Err(StatsError::NoData);
    }
    teams
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| StatsError::TeamNotFound {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests;
