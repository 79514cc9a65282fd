//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlb_team_stats::{
    cli::{Commands, Mlb},
    commands::{
        fetch::{handle_fetch, FetchParams},
        report::{handle_report, ReportParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Mlb::parse();

    match app.command {
        Commands::Fetch {
            common,
            refresh,
            delay_ms,
        } => {
            handle_fetch(FetchParams {
                team: common.team,
                season: common.season,
                refresh,
                delay_ms,
                verbose: common.verbose,
            })
            .await?
        }

        Commands::Report {
            common,
            out_dir,
            json,
            refresh,
        } => {
            handle_report(ReportParams {
                team: common.team,
                season: common.season,
                out_dir,
                as_json: json,
                refresh,
                verbose: common.verbose,
            })
            .await?
        }
    }

    Ok(())
}
