use serde::{Deserialize, Serialize};

use crate::cli::types::{GamePk, TeamId};


/// One team from the league-wide `/teams` listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Top-level envelope for `/teams`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamsEnvelope {
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Game status block inside the schedule.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameStatus {
    #[serde(rename = "abstractGameState", default)]
    pub abstract_game_state: String,
}

/// One scheduled game.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduledGame {
    #[serde(rename = "gamePk")]
    pub game_pk: GamePk,
    #[serde(rename = "officialDate", default)]
    pub official_date: Option<String>,
    #[serde(default)]
    pub status: GameStatus,
}

impl ScheduledGame {
    /// Only finished games carry a complete box score worth aggregating.
    pub fn is_final(&self) -> bool {
        self.status.abstract_game_state == "Final"
    }
}

/// One calendar date's slate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

/// Top-level envelope for `/schedule`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleEnvelope {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

impl ScheduleEnvelope {
    /// Final games in canonical processing order: official date ascending,
    /// then game pk. This order, not any filesystem enumeration, defines the
    /// last-write-wins semantics downstream.
    ///
    /// A postponed game can appear under both its original and makeup slate
    /// dates with the same pk, so games dedup by pk (keeping the earliest
    /// date) or the season would fold it twice.
    pub fn final_games(&self) -> Vec<(String, GamePk)> {
        let mut games: Vec<(String, GamePk)> = self
            .dates
            .iter()
            .flat_map(|d| {
                d.games.iter().filter(|g| g.is_final()).map(|g| {
                    let date = g.official_date.clone().unwrap_or_else(|| d.date.clone());
                    (date, g.game_pk)
                })
            })
            .collect();
        games.sort();
        let mut seen = std::collections::BTreeSet::new();
        games.retain(|(_, pk)| seen.insert(*pk));
        games
    }
}
