//! Unit tests for season aggregation

use super::*;
use crate::stats::extract::{GameRecord, Role};
use crate::cli::types::GamePk;
use std::collections::BTreeMap;

fn game_record(pk: u64, date: &str) -> GameRecord {
    GameRecord {
        game_pk: GamePk::new(pk),
        date: date.to_string(),
        opponent: "Texas Rangers".to_string(),
        is_home: true,
        team_score: Some(4),
        opponent_score: Some(2),
        result: Some(crate::stats::extract::GameResult::Win),
    }
}

fn player(id: u64, name: &str, stats: &[(&str, StatValue)]) -> PlayerGameStats {
    PlayerGameStats {
        player_id: PlayerId::new(id),
        name: name.to_string(),
        stats: stats
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn extract(pk: u64, date: &str, role: Role, players: Vec<PlayerGameStats>) -> GameExtract {
    let (batting, pitching) = match role {
        Role::Batting => (players, Vec::new()),
        Role::Pitching => (Vec::new(), players),
    };
    GameExtract {
        game: game_record(pk, date),
        batting,
        pitching,
    }
}

#[test]
fn test_games_played_counts_qualifying_appearances() {
    let games = vec![
        extract(1, "2025-04-01", Role::Batting, vec![player(10, "A", &[("atBats", StatValue::Number(4.0))])]),
        extract(2, "2025-04-02", Role::Batting, vec![]),
        extract(3, "2025-04-03", Role::Batting, vec![player(10, "A", &[("atBats", StatValue::Number(3.0))])]),
    ];

    let totals = fold_games(&games);
    let agg = &totals.batting[&PlayerId::new(10)];
    assert_eq!(agg.games_played, 2);
    assert_eq!(agg.number("atBats"), 7.0);
}

#[test]
fn test_appearance_with_only_text_stats_still_counts() {
    let games = vec![extract(
        1,
        "2025-04-01",
        Role::Batting,
        vec![player(10, "A", &[("note", StatValue::Text("a-PH".into()))])],
    )];

    let totals = fold_games(&games);
    let agg = &totals.batting[&PlayerId::new(10)];
    assert_eq!(agg.games_played, 1);
    assert_eq!(agg.number("atBats"), 0.0);
}

#[test]
fn test_numeric_fields_sum_and_init_at_zero() {
    let games = vec![
        extract(1, "2025-04-01", Role::Batting, vec![player(10, "A", &[
            ("hits", StatValue::Number(2.0)),
        ])]),
        extract(2, "2025-04-02", Role::Batting, vec![player(10, "A", &[
            ("hits", StatValue::Number(1.0)),
            ("doubles", StatValue::Number(1.0)),
        ])]),
    ];

    let totals = fold_games(&games);
    let agg = &totals.batting[&PlayerId::new(10)];
    assert_eq!(agg.number("hits"), 3.0);
    assert_eq!(agg.number("doubles"), 1.0);
}

#[test]
fn test_text_fields_are_last_write_wins() {
    let games = vec![
        extract(1, "2025-04-01", Role::Batting, vec![player(10, "A", &[
            ("note", StatValue::Text("first".into())),
        ])]),
        extract(2, "2025-04-02", Role::Batting, vec![player(10, "A", &[
            ("note", StatValue::Text("second".into())),
        ])]),
    ];

    let totals = fold_games(&games);
    assert_eq!(
        totals.batting[&PlayerId::new(10)].stats.get("note"),
        Some(&StatValue::Text("second".into()))
    );
}

#[test]
fn test_numeric_totals_are_order_independent() {
    let a = extract(1, "2025-04-01", Role::Batting, vec![player(10, "A", &[
        ("hits", StatValue::Number(2.0)),
        ("atBats", StatValue::Number(4.0)),
    ])]);
    let b = extract(2, "2025-04-02", Role::Batting, vec![player(10, "A", &[
        ("hits", StatValue::Number(1.0)),
        ("atBats", StatValue::Number(5.0)),
    ])]);

    let forward = fold_games([&a, &b]);
    let reverse = fold_games([&b, &a]);

    let f = &forward.batting[&PlayerId::new(10)];
    let r = &reverse.batting[&PlayerId::new(10)];
    assert_eq!(f.number("hits"), r.number("hits"));
    assert_eq!(f.number("atBats"), r.number("atBats"));
    assert_eq!(f.games_played, r.games_played);
}

#[test]
fn test_roles_aggregate_independently() {
    let games = vec![
        extract(1, "2025-04-01", Role::Batting, vec![player(10, "Two Way", &[
            ("atBats", StatValue::Number(3.0)),
        ])]),
        extract(2, "2025-04-02", Role::Pitching, vec![player(10, "Two Way", &[
            ("strikeOuts", StatValue::Number(5.0)),
        ])]),
    ];

    let totals = fold_games(&games);
    assert_eq!(totals.batting[&PlayerId::new(10)].games_played, 1);
    assert_eq!(totals.pitching[&PlayerId::new(10)].games_played, 1);
    assert_eq!(totals.batting[&PlayerId::new(10)].number("atBats"), 3.0);
    assert_eq!(totals.pitching[&PlayerId::new(10)].number("strikeOuts"), 5.0);
}

#[test]
fn test_one_aggregate_per_player() {
    let games = vec![
        extract(1, "2025-04-01", Role::Batting, vec![
            player(10, "A", &[("hits", StatValue::Number(1.0))]),
            player(11, "B", &[("hits", StatValue::Number(2.0))]),
        ]),
        extract(2, "2025-04-02", Role::Batting, vec![
            player(10, "A", &[("hits", StatValue::Number(1.0))]),
        ]),
    ];

    let totals = fold_games(&games);
    assert_eq!(totals.batting.len(), 2);
}

#[test]
fn test_empty_input_produces_empty_totals() {
    let totals = fold_games(&[]);
    assert!(totals.batting.is_empty());
    assert!(totals.pitching.is_empty());
}
