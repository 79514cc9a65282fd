//! Unit tests for MLB API client helpers

use super::*;

#[test]
fn test_stats_api_base_url_constant() {
    assert_eq!(STATS_API_BASE_URL, "https://statsapi.mlb.com/api");
}

#[test]
fn test_lookup_team_returns_canonical_spelling() {
    let teams = vec![
        Team {
            id: TeamId::new(136),
            name: "Seattle Mariners".to_string(),
        },
        Team {
            id: TeamId::new(117),
            name: "Houston Astros".to_string(),
        },
    ];

    // Lookup is case-insensitive, but the result carries the listing's
    // spelling so downstream box-score matching stays exact.
    let team = lookup_team(&teams, "seattle mariners").unwrap();
    assert_eq!(team.id, TeamId::new(136));
    assert_eq!(team.name, "Seattle Mariners");

    let team = lookup_team(&teams, "Houston Astros").unwrap();
    assert_eq!(team.id, TeamId::new(117));
}

#[test]
fn test_lookup_team_not_found() {
    let teams = vec![Team {
        id: TeamId::new(136),
        name: "Seattle Mariners".to_string(),
    }];

    match lookup_team(&teams, "Springfield Isotopes") {
        Err(StatsError::TeamNotFound { name }) => assert_eq!(name, "Springfield Isotopes"),
        other => panic!("Expected TeamNotFound, got {:?}", other),
    }
}

#[test]
fn test_lookup_team_empty_listing_is_no_data() {
    match lookup_team(&[], "Seattle Mariners") {
        Err(StatsError::NoData) => (),
        other => panic!("Expected NoData, got {:?}", other),
    }
}

#[test]
fn test_cache_status_equality() {
    assert_eq!(CacheStatus::Hit, CacheStatus::Hit);
    assert_ne!(CacheStatus::Hit, CacheStatus::Miss);
    assert_ne!(CacheStatus::Miss, CacheStatus::Refreshed);
}
