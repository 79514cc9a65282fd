//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

/// Common arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Team name, e.g. "Seattle Mariners" (or set `MLB_STATS_TEAM` env var).
    #[clap(long, short)]
    pub team: Option<String>,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Print per-game progress and cache information.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-team-stats", about = "MLB team season stats CLI")]
pub struct Mlb {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the season schedule and every final game's box-score document.
    ///
    /// Raw JSON payloads are written to the cache directory so `report` can
    /// run repeatedly without touching the network.
    Fetch {
        #[clap(flatten)]
        common: CommonArgs,

        /// Force refresh from the MLB API, overwriting cached documents.
        #[clap(long)]
        refresh: bool,

        /// Milliseconds to sleep between API requests on cache misses.
        #[clap(long, default_value_t = 500)]
        delay_ms: u64,
    },

    /// Aggregate cached games into per-player season batting and pitching tables.
    ///
    /// Missing game documents are fetched on demand. Output goes to CSV files
    /// in the export directory, or to stdout with `--json`.
    Report {
        #[clap(flatten)]
        common: CommonArgs,

        /// Directory for batting.csv / pitching.csv exports.
        #[clap(long, default_value = "exports")]
        out_dir: PathBuf,

        /// Print rows as JSON to stdout instead of writing CSV files.
        #[clap(long)]
        json: bool,

        /// Force refresh of game documents from the MLB API.
        #[clap(long)]
        refresh: bool,
    },
}
