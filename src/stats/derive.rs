//! Rate statistics derived from season totals.
//!
//! Batting rates round to 3 decimal places, pitching rates to 2. All
//! zero-denominator cases produce 0 except the strikeout-to-walk ratio,
//! which is a typed infinite sentinel when a pitcher has strikeouts but no
//! walks (see [`Ratio`]).

use serde::Serialize;
use std::fmt;

use crate::stats::aggregate::PlayerSeasonAggregate;
use crate::stats::value::StatValue;

#[cfg(test)]
mod tests;

/// A ratio whose denominator may legitimately be zero.
///
/// Serialization targets do not agree on a float-infinity literal, so the
/// infinite case is carried as an explicit variant and rendered as `"INF"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Finite(f64),
    Infinite,
}

impl Serialize for Ratio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Ratio::Finite(v) => serializer.serialize_f64(*v),
            Ratio::Infinite => serializer.serialize_str("INF"),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Finite(v) => write!(f, "{:.2}", v),
            Ratio::Infinite => write!(f, "INF"),
        }
    }
}

/// Derived batting rate stats, already rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BattingDerived {
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
}

/// Derived pitching rate stats, already rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchingDerived {
    /// Innings pitched converted out of thirds notation into a decimal.
    pub innings: f64,
    pub era: f64,
    pub whip: f64,
    pub k9: f64,
    pub kbb: Ratio,
}

pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn rate3(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        round3(numerator / denominator)
    }
}

fn rate2(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        round2(numerator / denominator)
    }
}

/// Convert innings-pitched notation into decimal innings.
///
/// The digit after the point counts thirds of an inning: `"6.2"` is six and
/// two-thirds innings, not 6.2. Numeric totals are normalized to one tenth
/// before splitting so float noise from summation cannot shift the digit.
/// Anything unparseable counts as zero innings.
pub fn parse_innings(value: Option<&StatValue>) -> f64 {
    match value {
        Some(StatValue::Number(n)) if n.is_finite() && *n >= 0.0 => {
            let tenths = (*n * 10.0).round();
            let whole = (tenths / 10.0).trunc();
            let outs = (tenths - whole * 10.0) / 3.0;
            whole + outs
        }
        Some(StatValue::Text(s)) => {
            let mut parts = s.trim().splitn(2, '.');
            let whole = match parts.next().and_then(|p| p.parse::<u32>().ok()) {
                Some(w) => w as f64,
                None => return 0.0,
            };
            match parts.next() {
                None | Some("") => whole,
                Some(frac) => match frac.chars().next().and_then(|c| c.to_digit(10)) {
                    Some(d) => whole + d as f64 / 3.0,
                    None => 0.0,
                },
            }
        }
        _ => 0.0,
    }
}

/// Compute batting rate stats from one player's season totals.
pub fn batting_derived(agg: &PlayerSeasonAggregate) -> BattingDerived {
    let at_bats = agg.number("atBats");
    let hits = agg.number("hits");
    let walks = agg.number("baseOnBalls");
    let hbp = agg.number("hitByPitch");
    let sac_flies = agg.number("sacFlies");
    let doubles = agg.number("doubles");
    let triples = agg.number("triples");
    let home_runs = agg.number("homeRuns");

    let avg = rate3(hits, at_bats);
    let obp = rate3(hits + walks + hbp, at_bats + walks + hbp + sac_flies);
    let slg = rate3(hits + doubles + 2.0 * triples + 3.0 * home_runs, at_bats);
    // OPS sums the already-rounded components.
    let ops = round3(obp + slg);

    BattingDerived { avg, obp, slg, ops }
}

/// Compute pitching rate stats from one player's season totals.
pub fn pitching_derived(agg: &PlayerSeasonAggregate) -> PitchingDerived {
    let innings = parse_innings(agg.stats.get("inningsPitched"));
    let earned_runs = agg.number("earnedRuns");
    let walks = agg.number("baseOnBalls");
    let hits = agg.number("hits");
    let strike_outs = agg.number("strikeOuts");

    let era = rate2(earned_runs * 9.0, innings);
    let whip = rate2(walks + hits, innings);
    let k9 = rate2(strike_outs * 9.0, innings);
    let kbb = if walks == 0.0 {
        Ratio::Infinite
    } else {
        Ratio::Finite(round2(strike_outs / walks))
    };

    PitchingDerived {
        innings,
        era,
        whip,
        k9,
        kbb,
    }
}
