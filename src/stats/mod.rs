//! The aggregation and derivation core.
//!
//! Raw per-game feed documents flow through [`extract`] into per-game
//! records, fold through [`aggregate`] into per-player season totals, gain
//! rate stats in [`derive`], and become display-ready tables in [`report`].

pub mod aggregate;
pub mod derive;
pub mod extract;
pub mod report;
pub mod value;

pub use aggregate::{fold_games, PlayerSeasonAggregate, SeasonTotals};
pub use derive::{batting_derived, pitching_derived, BattingDerived, PitchingDerived, Ratio};
pub use extract::{extract_game, GameExtract, GameRecord, GameResult, PlayerGameStats, Role};
pub use report::{batting_table, pitching_table, Table};
pub use value::StatValue;
