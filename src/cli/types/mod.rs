//! Type-safe wrappers for MLB Stats API identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::{GamePk, PlayerId, TeamId};
pub use time::Season;
