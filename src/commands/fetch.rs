//! Download a team's season schedule and all final game documents.

use std::time::Duration;

use crate::cli::types::Season;
use crate::error::Result;
use crate::mlb::http::{load_or_fetch_game_feed, load_or_fetch_schedule, CacheStatus};

use super::CommandContext;

/// Parameters for the fetch command
#[derive(Debug)]
pub struct FetchParams {
    pub team: Option<String>,
    pub season: Season,
    pub refresh: bool,
    pub delay_ms: u64,
    pub verbose: bool,
}

/// Fetch the schedule and every final game's raw feed into the disk cache.
///
/// A failure on one game is reported and skipped; the remaining games are
/// still fetched.
pub async fn handle_fetch(params: FetchParams) -> Result<()> {
    let ctx = CommandContext::new(params.team, params.season, params.verbose).await?;

    let (schedule, status) =
        load_or_fetch_schedule(&ctx.client, ctx.team_id, ctx.season, params.refresh).await?;
    if params.verbose {
        match status {
            CacheStatus::Hit => println!("✓ Schedule loaded (from cache)"),
            CacheStatus::Miss => println!("✓ Schedule fetched (cache miss)"),
            CacheStatus::Refreshed => println!("✓ Schedule fetched (refreshed)"),
        }
    }

    let games = schedule.final_games();
    if games.is_empty() {
        println!("No final games for {} in {}", ctx.team, ctx.season);
        return Ok(());
    }

    println!(
        "Fetching {} final games for {} ({})...",
        games.len(),
        ctx.team,
        ctx.season
    );

    let mut fetched = 0usize;
    let mut cached = 0usize;
    let mut failed = 0usize;
    for (date, game_pk) in &games {
        match load_or_fetch_game_feed(&ctx.client, *game_pk, params.refresh).await {
            Ok((_, CacheStatus::Hit)) => {
                cached += 1;
                if params.verbose {
                    println!("✓ {} game {} (from cache)", date, game_pk);
                }
            }
            Ok((_, status)) => {
                fetched += 1;
                if params.verbose {
                    let label = match status {
                        CacheStatus::Refreshed => "refreshed",
                        _ => "fetched",
                    };
                    println!("✓ {} game {} ({})", date, game_pk, label);
                }
                // Be polite to the public API between real requests.
                tokio::time::sleep(Duration::from_millis(params.delay_ms)).await;
            }
            Err(e) => {
                failed += 1;
                eprintln!("⚠ Could not fetch game {} on {}: {}", game_pk, date, e);
            }
        }
    }

    println!(
        "✓ Done: {} fetched, {} already cached, {} failed",
        fetched, cached, failed
    );

    Ok(())
}
