//! NBA Statistics Downloader Library
//!
//! This library backs four small command-line tools: three download tabular
//! data from the NBA statistics API and export it to CSV or Excel (the
//! play-by-play event log for one game, and the game log records for a season,
//! with a playoffs-only variant); the fourth analyzes downloaded play-by-play
//! files into per-player shooting and scoring reports.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nbastats::cli::{ExportFormat, SeasonType};
//! use nbastats::config::ClientConfig;
//! use nbastats::data_fetcher::{NbaStatsClient, StatsApi};
//! use nbastats::error::AppError;
//! use nbastats::export::{self, Table};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = NbaStatsClient::new(&ClientConfig::from_env())?;
//!
//!     // Fetch the play-by-play log for one game
//!     let result = client.fetch_play_by_play("0020901003").await?;
//!     let rows = result.rows("PlayByPlay").unwrap_or_default();
//!
//!     // Export it as CSV
//!     let table = Table::from_records(rows);
//!     export::write_table(&table, "pbp.csv".as_ref(), ExportFormat::Csv)?;
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod logging;

// Re-export commonly used types for convenience
pub use cli::{ExportFormat, SeasonType};
pub use config::ClientConfig;
pub use data_fetcher::{NbaStatsClient, ResultSet, StatsApi};
pub use error::AppError;
pub use export::Table;
