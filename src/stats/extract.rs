//! Game record extraction from raw MLB live-feed documents.
//!
//! One feed document describes one game. Extraction locates the target
//! team's side of the box score, captures game metadata, and resolves every
//! player's batting and pitching blocks into [`StatValue`] maps. A document
//! for a game the target team did not play in yields `Ok(None)`.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::cli::types::{GamePk, PlayerId};
use crate::error::{Result, StatsError};
use crate::stats::value::StatValue;


/// Outcome of a game from the target team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "T")]
    Tie,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
            GameResult::Tie => "T",
        };
        write!(f, "{}", c)
    }
}

/// Player role within a box score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Batting,
    Pitching,
}

impl Role {
    pub fn block_key(&self) -> &'static str {
        match self {
            Role::Batting => "batting",
            Role::Pitching => "pitching",
        }
    }
}

/// Game metadata from the target team's perspective. Immutable after extraction.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_pk: GamePk,
    pub date: String,
    pub opponent: String,
    pub is_home: bool,
    /// Absent when the feed carries no linescore (e.g. postponed games).
    pub team_score: Option<u64>,
    pub opponent_score: Option<u64>,
    pub result: Option<GameResult>,
}

/// One player's raw stat block for one role in one game.
#[derive(Debug, Clone)]
pub struct PlayerGameStats {
    pub player_id: PlayerId,
    pub name: String,
    pub stats: BTreeMap<String, StatValue>,
}

/// Everything extracted from a single game document.
#[derive(Debug, Clone)]
pub struct GameExtract {
    pub game: GameRecord,
    pub batting: Vec<PlayerGameStats>,
    pub pitching: Vec<PlayerGameStats>,
}

fn malformed(detail: &str) -> StatsError {
    StatsError::Cache {
        message: format!("malformed game document: {}", detail),
    }
}

fn side_team_name<'a>(doc: &'a Value, side: &str) -> Option<&'a str> {
    doc.get("gameData")?
        .get("teams")?
        .get(side)?
        .get("name")?
        .as_str()
}

fn linescore_runs(doc: &Value, side: &str) -> Option<u64> {
    doc.get("liveData")?
        .get("linescore")?
        .get("teams")?
        .get(side)?
        .get("runs")?
        .as_u64()
}

fn boxscore_players<'a>(doc: &'a Value, side: &str) -> Option<&'a serde_json::Map<String, Value>> {
    doc.get("liveData")?
        .get("boxscore")?
        .get("teams")?
        .get(side)?
        .get("players")?
        .as_object()
}

/// Resolve one role's raw stat block into a tagged stat map.
///
/// Returns `None` when the block is missing or empty, which marks the
/// player-game as non-qualifying for that role.
fn resolve_stat_block(entry: &Value, role: Role) -> Option<BTreeMap<String, StatValue>> {
    let block = entry.get("stats")?.get(role.block_key())?.as_object()?;
    if block.is_empty() {
        return None;
    }
    let stats = block
        .iter()
        .filter_map(|(k, v)| StatValue::from_json(v).map(|sv| (k.clone(), sv)))
        .collect();
    Some(stats)
}

/// Extract the target team's game record and player stat blocks from one
/// raw live-feed document.
///
/// `Ok(None)` means the team did not play in this game; a missing or
/// unnavigable document shape is an error so the caller can report and skip.
pub fn extract_game(doc: &Value, team: &str) -> Result<Option<GameExtract>> {
    let home = side_team_name(doc, "home").ok_or_else(|| malformed("missing home team name"))?;
    let away = side_team_name(doc, "away").ok_or_else(|| malformed("missing away team name"))?;

    let (side, opp_side, opponent, is_home) = if home == team {
        ("home", "away", away, true)
    } else if away == team {
        ("away", "home", home, false)
    } else {
        return Ok(None);
    };

    let game_pk = doc
        .get("gamePk")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| malformed("missing gamePk"))?;

    let date = doc
        .get("gameData")
        .and_then(|g| g.get("datetime"))
        .and_then(|d| d.get("officialDate"))
        .and_then(|d| d.as_str())
        .ok_or_else(|| malformed("missing officialDate"))?
        .to_string();

    // Score and result come from the linescore when it exists; otherwise the
    // fields stay empty rather than defaulting.
    let team_score = linescore_runs(doc, side);
    let opponent_score = linescore_runs(doc, opp_side);
    let result = match (team_score, opponent_score) {
        (Some(us), Some(them)) => Some(match us.cmp(&them) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::Loss,
            std::cmp::Ordering::Equal => GameResult::Tie,
        }),
        _ => None,
    };

    let game = GameRecord {
        game_pk: GamePk::new(game_pk),
        date,
        opponent: opponent.to_string(),
        is_home,
        team_score,
        opponent_score,
        result,
    };

    let players =
        boxscore_players(doc, side).ok_or_else(|| malformed("missing box score players"))?;

    let mut batting = Vec::new();
    let mut pitching = Vec::new();
    for entry in players.values() {
        // Entries without identity carry nothing we can aggregate.
        let Some(id) = entry
            .get("person")
            .and_then(|p| p.get("id"))
            .and_then(|v| v.as_u64())
        else {
            continue;
        };
        let Some(name) = entry
            .get("person")
            .and_then(|p| p.get("fullName"))
            .and_then(|v| v.as_str())
        else {
            continue;
        };

        // A position player who pitched contributes to both roles.
        if let Some(stats) = resolve_stat_block(entry, Role::Batting) {
            batting.push(PlayerGameStats {
                player_id: PlayerId::new(id),
                name: name.to_string(),
                stats,
            });
        }
        if let Some(stats) = resolve_stat_block(entry, Role::Pitching) {
            pitching.push(PlayerGameStats {
                player_id: PlayerId::new(id),
                name: name.to_string(),
                stats,
            });
        }
    }

    Ok(Some(GameExtract {
        game,
        batting,
        pitching,
    }))
}
