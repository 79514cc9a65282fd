//! MLB Team Season Stats CLI Library
//!
//! Fetches one team's per-game box scores from the public MLB Stats API,
//! persists the raw JSON documents, and derives per-player season batting
//! and pitching tables.
//!
//! ## Features
//!
//! - **Schedule + Box Score Retrieval**: Raw game feeds from `statsapi.mlb.com`
//! - **Disk Caching**: Every API payload is persisted and reusable offline
//! - **Season Aggregation**: Per-player totals with games-played tracking
//! - **Rate Stats**: AVG/OBP/SLG/OPS and ERA/WHIP/K9/KBB with baseball's
//!   thirds-based innings notation handled correctly
//! - **CSV Export**: Ranked batting and pitching tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_team_stats::{commands::report::*, Season};
//!
//! # async fn example() -> mlb_team_stats::Result<()> {
//! let params = ReportParams {
//!     team: Some("Seattle Mariners".to_string()),
//!     season: Season::new(2025),
//!     out_dir: "exports".into(),
//!     as_json: false,
//!     refresh: false,
//!     verbose: false,
//! };
//!
//! handle_report(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your team to avoid passing it in every command:
//! ```bash
//! export MLB_STATS_TEAM="Seattle Mariners"
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;
pub mod mlb;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{GamePk, PlayerId, Season, TeamId};
pub use error::{Result, StatsError};
pub use stats::{
    GameExtract, GameRecord, GameResult, PlayerSeasonAggregate, Ratio, SeasonTotals, StatValue,
};

pub const TEAM_ENV_VAR: &str = "MLB_STATS_TEAM";
