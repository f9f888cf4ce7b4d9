use clap::Parser;
use nbastats::cli::SeasonGameIdsArgs;
use nbastats::commands;
use nbastats::config::ClientConfig;
use nbastats::data_fetcher::NbaStatsClient;
use nbastats::error::AppError;
use nbastats::logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = SeasonGameIdsArgs::parse();
    logging::init();

    let client = NbaStatsClient::new(&ClientConfig::from_env())?;
    commands::run_season_game_ids(&client, &args).await
}
