//! Display-ready tables: fixed column schemas, formatting, and ranking order.
//!
//! Batting rows rank by OPS descending, pitching rows by ERA ascending.
//! Raw stat keys outside the fixed schema pass through as extra columns
//! appended after the rate stats, as a stable union across all rows.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::cli::types::PlayerId;
use crate::stats::aggregate::PlayerSeasonAggregate;
use crate::stats::derive::{batting_derived, pitching_derived, Ratio};
use crate::stats::value::StatValue;


/// Canonical batting counting-stat columns, in display order.
pub const BATTING_COUNTING: &[&str] = &[
    "atBats",
    "runs",
    "hits",
    "doubles",
    "triples",
    "homeRuns",
    "rbi",
    "baseOnBalls",
    "strikeOuts",
    "hitByPitch",
    "sacFlies",
    "stolenBases",
];

/// Canonical pitching counting-stat columns, in display order.
pub const PITCHING_COUNTING: &[&str] = &[
    "hits",
    "runs",
    "earnedRuns",
    "homeRuns",
    "baseOnBalls",
    "strikeOuts",
];

const BATTING_RATES: &[&str] = &["avg", "obp", "slg", "ops"];
const PITCHING_RATES: &[&str] = &["era", "whip", "k9", "kbb"];

/// A display-ready table: header plus formatted string rows.
///
/// The header is stable for a given input schema even when there are no
/// rows, so empty seasons still export well-formed files.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn fmt_number(v: f64, precision: usize) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.*}", precision, v)
    }
}

fn fmt_stat(value: &StatValue, precision: usize) -> String {
    match value {
        StatValue::Number(n) => fmt_number(*n, precision),
        StatValue::Text(s) => s.clone(),
    }
}

/// Extra stat keys not covered by a fixed schema, unioned over all players.
fn extra_keys<'a>(
    aggregates: impl Iterator<Item = &'a PlayerSeasonAggregate>,
    fixed: &[&str],
) -> Vec<String> {
    let mut keys = BTreeSet::new();
    for agg in aggregates {
        for key in agg.stats.keys() {
            if !fixed.contains(&key.as_str()) {
                keys.insert(key.clone());
            }
        }
    }
    keys.into_iter().collect()
}

fn header(counting: &[&str], rates: &[&str], extras: &[String]) -> Vec<String> {
    let mut columns = vec!["playerId".to_string(), "name".to_string(), "games".to_string()];
    columns.extend(counting.iter().map(|c| c.to_string()));
    columns.extend(rates.iter().map(|c| c.to_string()));
    columns.extend(extras.iter().cloned());
    columns
}

/// Build the batting table, sorted by OPS descending (player id breaks ties).
pub fn batting_table(totals: &BTreeMap<PlayerId, PlayerSeasonAggregate>) -> Table {
    let extras = extra_keys(totals.values(), BATTING_COUNTING);
    let columns = header(BATTING_COUNTING, BATTING_RATES, &extras);

    let mut ranked: Vec<(f64, &PlayerSeasonAggregate, Vec<String>)> = totals
        .values()
        .map(|agg| {
            let derived = batting_derived(agg);
            let mut cells = vec![
                agg.player_id.to_string(),
                agg.name.clone(),
                agg.games_played.to_string(),
            ];
            for key in BATTING_COUNTING {
                cells.push(fmt_number(agg.number(key), 3));
            }
            cells.push(format!("{:.3}", derived.avg));
            cells.push(format!("{:.3}", derived.obp));
            cells.push(format!("{:.3}", derived.slg));
            cells.push(format!("{:.3}", derived.ops));
            for key in &extras {
                cells.push(agg.stats.get(key).map(|v| fmt_stat(v, 3)).unwrap_or_default());
            }
            (derived.ops, agg, cells)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.player_id.cmp(&b.1.player_id))
    });

    Table {
        columns,
        rows: ranked.into_iter().map(|(_, _, cells)| cells).collect(),
    }
}

/// Build the pitching table, sorted by ERA ascending (player id breaks ties).
///
/// The raw `inningsPitched` total is consumed by the decimal `innings`
/// column and does not reappear as an extra.
pub fn pitching_table(totals: &BTreeMap<PlayerId, PlayerSeasonAggregate>) -> Table {
    let mut fixed: Vec<&str> = PITCHING_COUNTING.to_vec();
    fixed.push("inningsPitched");
    let extras = extra_keys(totals.values(), &fixed);

    let mut columns = vec!["playerId".to_string(), "name".to_string(), "games".to_string()];
    columns.push("innings".to_string());
    columns.extend(PITCHING_COUNTING.iter().map(|c| c.to_string()));
    columns.extend(PITCHING_RATES.iter().map(|c| c.to_string()));
    columns.extend(extras.iter().cloned());

    let mut ranked: Vec<(f64, &PlayerSeasonAggregate, Vec<String>)> = totals
        .values()
        .map(|agg| {
            let derived = pitching_derived(agg);
            let mut cells = vec![
                agg.player_id.to_string(),
                agg.name.clone(),
                agg.games_played.to_string(),
            ];
            cells.push(format!("{:.2}", derived.innings));
            for key in PITCHING_COUNTING {
                cells.push(fmt_number(agg.number(key), 2));
            }
            cells.push(format!("{:.2}", derived.era));
            cells.push(format!("{:.2}", derived.whip));
            cells.push(format!("{:.2}", derived.k9));
            cells.push(match derived.kbb {
                Ratio::Finite(v) => format!("{:.2}", v),
                Ratio::Infinite => "INF".to_string(),
            });
            for key in &extras {
                cells.push(agg.stats.get(key).map(|v| fmt_stat(v, 2)).unwrap_or_default());
            }
            (derived.era, agg, cells)
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.player_id.cmp(&b.1.player_id))
    });

    Table {
        columns,
        rows: ranked.into_iter().map(|(_, _, cells)| cells).collect(),
    }
}
