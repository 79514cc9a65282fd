//! Season aggregation: fold per-game extracts into per-player totals.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::PlayerId;
use crate::stats::extract::{GameExtract, PlayerGameStats};
use crate::stats::value::StatValue;

#[cfg(test)]
mod tests;

/// Running per-player totals for one role.
///
/// Numeric fields are running sums; text fields hold the last-seen value.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSeasonAggregate {
    pub player_id: PlayerId,
    pub name: String,
    pub games_played: u32,
    pub stats: BTreeMap<String, StatValue>,
}

impl PlayerSeasonAggregate {
    fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            games_played: 0,
            stats: BTreeMap::new(),
        }
    }

    /// Numeric total for a stat field, defaulting to 0 when absent or text.
    pub fn number(&self, key: &str) -> f64 {
        self.stats.get(key).and_then(StatValue::as_number).unwrap_or(0.0)
    }

    fn absorb(&mut self, game_stats: &PlayerGameStats) {
        self.games_played += 1;
        // Name can change between documents (e.g. accent fixes); keep the
        // latest observed spelling.
        self.name = game_stats.name.clone();

        for (key, value) in &game_stats.stats {
            match value {
                StatValue::Number(n) => {
                    let total = self
                        .stats
                        .entry(key.clone())
                        .or_insert(StatValue::Number(0.0));
                    match total {
                        StatValue::Number(sum) => *sum += n,
                        // A field that was text before is numeric now; the
                        // running sum restarts from this game's value.
                        StatValue::Text(_) => *total = StatValue::Number(*n),
                    }
                }
                StatValue::Text(s) => {
                    // Last-write-wins for non-numeric fields.
                    self.stats.insert(key.clone(), StatValue::Text(s.clone()));
                }
            }
        }
    }
}

/// Per-player season totals for both roles, keyed by player id.
///
/// BTreeMap keying makes uniqueness per player structural and iteration
/// order deterministic.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SeasonTotals {
    pub batting: BTreeMap<PlayerId, PlayerSeasonAggregate>,
    pub pitching: BTreeMap<PlayerId, PlayerSeasonAggregate>,
}

fn fold_role(map: &mut BTreeMap<PlayerId, PlayerSeasonAggregate>, records: &[PlayerGameStats]) {
    for record in records {
        map.entry(record.player_id)
            .or_insert_with(|| PlayerSeasonAggregate::new(record.player_id, &record.name))
            .absorb(record);
    }
}

/// Fold an ordered sequence of game extracts into season totals.
///
/// Numeric totals are order-independent; last-write-wins text fields follow
/// the input order, so callers pass games sorted by date then game pk.
pub fn fold_games<'a>(extracts: impl IntoIterator<Item = &'a GameExtract>) -> SeasonTotals {
    let mut totals = SeasonTotals::default();
    for extract in extracts {
        fold_role(&mut totals.batting, &extract.batting);
        fold_role(&mut totals.pitching, &extract.pitching);
    }
    totals
}
