//! Aggregate cached game documents into season batting and pitching tables.

use rayon::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::cli::types::{GamePk, Season};
use crate::error::Result;
use crate::export::write_table_csv;
use crate::mlb::http::{load_or_fetch_game_feed, load_or_fetch_schedule};
use crate::stats::{batting_table, extract_game, fold_games, pitching_table, GameExtract};

use super::CommandContext;

/// Parameters for the report command
#[derive(Debug)]
pub struct ReportParams {
    pub team: Option<String>,
    pub season: Season,
    pub out_dir: PathBuf,
    pub as_json: bool,
    pub refresh: bool,
    pub verbose: bool,
}

/// Load every final game's document, in canonical date-then-pk order.
///
/// Per-game failures are reported and skipped so one bad document never
/// aborts the season.
async fn load_game_docs(ctx: &CommandContext, refresh: bool, verbose: bool) -> Result<Vec<(GamePk, Value)>> {
    let (schedule, _) = load_or_fetch_schedule(&ctx.client, ctx.team_id, ctx.season, refresh).await?;

    let games = schedule.final_games();
    let mut docs = Vec::with_capacity(games.len());
    for (date, game_pk) in games {
        match load_or_fetch_game_feed(&ctx.client, game_pk, refresh).await {
            Ok((doc, _)) => docs.push((game_pk, doc)),
            Err(e) => {
                eprintln!("⚠ Could not load game {} on {}: {}", game_pk, date, e);
            }
        }
    }

    if verbose {
        println!("✓ {} game documents loaded", docs.len());
    }
    Ok(docs)
}

/// Extract all documents, dropping and reporting the malformed ones.
///
/// Extraction of independent games runs in parallel; the collected order
/// matches the input order, so the downstream fold stays deterministic.
fn extract_all(docs: &[(GamePk, Value)], team: &str, verbose: bool) -> Vec<GameExtract> {
    let results: Vec<_> = docs
        .par_iter()
        .map(|(game_pk, doc)| (*game_pk, extract_game(doc, team)))
        .collect();

    let mut extracts = Vec::with_capacity(results.len());
    for (game_pk, result) in results {
        match result {
            Ok(Some(extract)) => extracts.push(extract),
            Ok(None) => {
                if verbose {
                    println!("- game {} skipped ({} did not play)", game_pk, team);
                }
            }
            Err(e) => eprintln!("⚠ Skipping game {}: {}", game_pk, e),
        }
    }
    extracts
}

/// Build and export the season report.
pub async fn handle_report(params: ReportParams) -> Result<()> {
    let ctx = CommandContext::new(params.team, params.season, params.verbose).await?;

    let docs = load_game_docs(&ctx, params.refresh, params.verbose).await?;
    let extracts = extract_all(&docs, &ctx.team, params.verbose);

    if params.verbose {
        let wins = extracts
            .iter()
            .filter(|e| e.game.result == Some(crate::stats::GameResult::Win))
            .count();
        println!(
            "✓ {} games extracted for {} ({} wins)",
            extracts.len(),
            ctx.team,
            wins
        );
    }

    let totals = fold_games(&extracts);
    let batting = batting_table(&totals.batting);
    let pitching = pitching_table(&totals.pitching);

    if params.as_json {
        let out = json!({
            "team": ctx.team,
            "season": ctx.season,
            "batting": batting,
            "pitching": pitching,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let batting_path = params.out_dir.join("batting.csv");
    let pitching_path = params.out_dir.join("pitching.csv");
    write_table_csv(&batting_path, &batting)?;
    write_table_csv(&pitching_path, &pitching)?;

    println!(
        "✓ Wrote {} batting rows to {}",
        batting.rows.len(),
        batting_path.display()
    );
    println!(
        "✓ Wrote {} pitching rows to {}",
        pitching.rows.len(),
        pitching_path.display()
    );

    Ok(())
}
