//! Unit tests for derived rate statistics

use super::*;
use crate::cli::types::PlayerId;
use std::collections::BTreeMap;

fn aggregate(stats: &[(&str, StatValue)]) -> PlayerSeasonAggregate {
    PlayerSeasonAggregate {
        player_id: PlayerId::new(1),
        name: "Test Player".to_string(),
        games_played: 3,
        stats: stats
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn n(v: f64) -> StatValue {
    StatValue::Number(v)
}

#[test]
fn test_batting_worked_example() {
    let agg = aggregate(&[
        ("atBats", n(10.0)),
        ("hits", n(4.0)),
        ("doubles", n(1.0)),
        ("triples", n(0.0)),
        ("homeRuns", n(1.0)),
        ("baseOnBalls", n(2.0)),
        ("hitByPitch", n(0.0)),
        ("sacFlies", n(0.0)),
    ]);

    let derived = batting_derived(&agg);
    assert_eq!(derived.avg, 0.400);
    assert_eq!(derived.obp, 0.500);
    assert_eq!(derived.slg, 0.800);
    assert_eq!(derived.ops, 1.300);
}

#[test]
fn test_zero_at_bats_defaults() {
    let derived = batting_derived(&aggregate(&[]));
    assert_eq!(derived.avg, 0.000);
    assert_eq!(derived.obp, 0.000);
    assert_eq!(derived.slg, 0.000);
    assert_eq!(derived.ops, 0.000);
}

#[test]
fn test_obp_can_be_nonzero_with_zero_at_bats() {
    // Walked in every plate appearance.
    let agg = aggregate(&[("atBats", n(0.0)), ("hits", n(0.0)), ("baseOnBalls", n(3.0))]);
    let derived = batting_derived(&agg);
    assert_eq!(derived.avg, 0.000);
    assert_eq!(derived.slg, 0.000);
    assert_eq!(derived.obp, 1.000);
    assert_eq!(derived.ops, 1.000);
}

#[test]
fn test_ops_sums_rounded_components() {
    // avg/obp/slg round individually; ops is the rounded sum of the rounded
    // pair, so it stays exactly obp + slg.
    let agg = aggregate(&[
        ("atBats", n(3.0)),
        ("hits", n(1.0)),
        ("baseOnBalls", n(0.0)),
    ]);
    let derived = batting_derived(&agg);
    assert_eq!(derived.obp, 0.333);
    assert_eq!(derived.slg, 0.333);
    assert_eq!(derived.ops, 0.666);
}

#[test]
fn test_innings_notation_is_thirds() {
    assert!((parse_innings(Some(&StatValue::Text("6.2".into()))) - (6.0 + 2.0 / 3.0)).abs() < 1e-9);
    assert_eq!(parse_innings(Some(&StatValue::Text("7".into()))), 7.0);
    assert_eq!(parse_innings(Some(&StatValue::Text("0.1".into()))), 1.0 / 3.0);
    // Numeric totals go through the same notation.
    assert!((parse_innings(Some(&StatValue::Number(6.2))) - (6.0 + 2.0 / 3.0)).abs() < 1e-9);
    // Float noise from summing tenths must not shift the digit.
    assert!(
        (parse_innings(Some(&StatValue::Number(6.2 + 5.1))) - (11.0 + 1.0)).abs() < 1e-9
    );
}

#[test]
fn test_unparseable_innings_count_as_zero() {
    assert_eq!(parse_innings(Some(&StatValue::Text("abc".into()))), 0.0);
    assert_eq!(parse_innings(Some(&StatValue::Text("6.x".into()))), 0.0);
    assert_eq!(parse_innings(None), 0.0);
}

#[test]
fn test_pitching_worked_example() {
    let agg = aggregate(&[
        ("earnedRuns", n(3.0)),
        ("inningsPitched", StatValue::Text("6.2".into())),
        ("baseOnBalls", n(2.0)),
        ("hits", n(5.0)),
        ("strikeOuts", n(7.0)),
    ]);

    let derived = pitching_derived(&agg);
    assert!((derived.innings - 6.667).abs() < 1e-3);
    assert_eq!(derived.era, 4.05);
    assert_eq!(derived.whip, 1.05);
    assert_eq!(derived.k9, 9.45);
    assert_eq!(derived.kbb, Ratio::Finite(3.50));
}

#[test]
fn test_zero_innings_defaults() {
    let agg = aggregate(&[
        ("earnedRuns", n(2.0)),
        ("strikeOuts", n(1.0)),
        ("baseOnBalls", n(1.0)),
    ]);

    let derived = pitching_derived(&agg);
    assert_eq!(derived.innings, 0.0);
    assert_eq!(derived.era, 0.00);
    assert_eq!(derived.whip, 0.00);
    assert_eq!(derived.k9, 0.00);
    assert_eq!(derived.kbb, Ratio::Finite(1.00));
}

#[test]
fn test_zero_walks_yields_infinite_ratio() {
    let agg = aggregate(&[
        ("inningsPitched", StatValue::Text("3.0".into())),
        ("strikeOuts", n(5.0)),
    ]);

    let derived = pitching_derived(&agg);
    assert_eq!(derived.kbb, Ratio::Infinite);
    assert_eq!(derived.kbb.to_string(), "INF");
}

#[test]
fn test_ratio_serialization() {
    assert_eq!(serde_json::to_string(&Ratio::Finite(3.5)).unwrap(), "3.5");
    assert_eq!(serde_json::to_string(&Ratio::Infinite).unwrap(), "\"INF\"");
}

#[test]
fn test_ratio_display_precision() {
    assert_eq!(Ratio::Finite(3.5).to_string(), "3.50");
}

#[test]
fn test_rounding_helpers() {
    assert_eq!(round3(0.39951), 0.400);
    assert_eq!(round2(4.0499), 4.05);
    assert_eq!(round2(9.4500001), 9.45);
}
