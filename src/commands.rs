//! Shared pipeline handlers behind the three download binaries.
//!
//! Each handler is the same three-stage sequence: print the status line,
//! perform the single fetch, export the table. Errors at any stage propagate
//! to the binary's `main` and terminate the process with a non-zero status.

use crate::analysis::{Season, hot_cold_report, points_report, write_report};
use crate::cli::{
    AnalyzeArgs, PlayByPlayArgs, PlayoffGameIdsArgs, ReportKind, SeasonGameIdsArgs, SeasonType,
};
use crate::constants::{LEAGUE_GAME_LOG_RESULT_SET, PLAY_BY_PLAY_RESULT_SET, RATE_LIMIT_DELAY};
use crate::data_fetcher::api::StatsApi;
use crate::data_fetcher::models::ResultSet;
use crate::error::AppError;
use crate::export::{self, Table};

/// Downloads the play-by-play log for one game and exports it.
///
/// Sleeps a fixed second after a successful export before returning, so the
/// process doesn't hammer the API when run in a shell loop. The season-id
/// handlers deliberately don't share this pause.
pub async fn run_play_by_play(api: &impl StatsApi, args: &PlayByPlayArgs) -> Result<(), AppError> {
    println!("Downloading game {}", args.game_id);
    let result = api.fetch_play_by_play(&args.game_id).await?;
    let rows = result.rows(PLAY_BY_PLAY_RESULT_SET).ok_or_else(|| {
        AppError::api_no_data(format!(
            "result set {PLAY_BY_PLAY_RESULT_SET} missing from response for game {}",
            args.game_id
        ))
    })?;
    let table = Table::from_records(rows);

    println!("Saving to {}", args.output.display());
    export::write_table(&table, &args.output, args.format)?;

    tokio::time::sleep(RATE_LIMIT_DELAY).await;
    Ok(())
}

/// Downloads the game log records for a season and season type and exports
/// them.
pub async fn run_season_game_ids(
    api: &impl StatsApi,
    args: &SeasonGameIdsArgs,
) -> Result<(), AppError> {
    println!(
        "Downloading game ids for {} {}",
        args.season, args.season_type
    );
    let result = api
        .fetch_season_game_ids(&args.season, args.season_type)
        .await?;
    let table = season_game_table(&result)?;

    println!("Saving data to {}", args.output.display());
    export::write_table(&table, &args.output, args.format)
}

/// Playoffs variant: the season type is pinned to Playoffs regardless of any
/// other input.
pub async fn run_playoff_game_ids(
    api: &impl StatsApi,
    args: &PlayoffGameIdsArgs,
) -> Result<(), AppError> {
    println!("Downloading game ids for season {}", args.season);
    let result = api
        .fetch_season_game_ids(&args.season, SeasonType::Playoffs)
        .await?;
    let table = season_game_table(&result)?;

    println!("Saving to {}", args.output.display());
    export::write_table(&table, &args.output, args.format)
}

/// Builds a per-player report from play-by-play CSVs downloaded earlier.
/// Purely local: reads `<data-dir>/<season>/*.csv` plus the season's player
/// list and writes one CSV report.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<(), AppError> {
    let mut seasons = Vec::with_capacity(args.seasons.len());
    for season_id in &args.seasons {
        seasons.push(Season::load(&args.data_dir, season_id)?);
    }

    let rows = match args.report {
        ReportKind::HotCold => hot_cold_report(&seasons),
        ReportKind::Points => points_report(&seasons),
    };

    println!("Saving report to {}", args.output.display());
    write_report(&rows, &args.output)
}

fn season_game_table(result: &ResultSet) -> Result<Table, AppError> {
    let rows = result.rows(LEAGUE_GAME_LOG_RESULT_SET).ok_or_else(|| {
        AppError::api_no_data(format!(
            "result set {LEAGUE_GAME_LOG_RESULT_SET} missing from response"
        ))
    })?;
    Ok(Table::from_records(rows))
}
