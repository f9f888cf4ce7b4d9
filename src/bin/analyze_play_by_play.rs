use clap::Parser;
use nbastats::cli::AnalyzeArgs;
use nbastats::commands;
use nbastats::error::AppError;
use nbastats::logging;

fn main() -> Result<(), AppError> {
    let args = AnalyzeArgs::parse();
    logging::init();

    commands::run_analyze(&args)
}
