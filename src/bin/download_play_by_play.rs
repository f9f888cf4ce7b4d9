use clap::Parser;
use nbastats::cli::PlayByPlayArgs;
use nbastats::commands;
use nbastats::config::ClientConfig;
use nbastats::data_fetcher::NbaStatsClient;
use nbastats::error::AppError;
use nbastats::logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = PlayByPlayArgs::parse();
    logging::init();

    let client = NbaStatsClient::new(&ClientConfig::from_env())?;
    commands::run_play_by_play(&client, &args).await
}
