use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Output file format for the exported table.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-delimited text with a header row.
    Csv,
    /// Single-sheet .xlsx workbook.
    Excel,
}

/// Competition phase the game log is filtered to.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonType {
    #[value(name = "Regular Season")]
    RegularSeason,
    #[value(name = "Playoffs")]
    Playoffs,
}

impl SeasonType {
    /// The literal string the API expects in the `SeasonType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-player report produced by the analyze command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// 3PT shooting splits inside vs. outside the hot window.
    HotCold,
    /// Games played, total points, and points per game.
    Points,
}

/// Download the play-by-play event log for a single game and save it as a
/// CSV or Excel table.
#[derive(Parser, Debug)]
#[command(name = "download-play-by-play", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct PlayByPlayArgs {
    /// Game id to download, e.g. 0020901003.
    #[arg(short = 'i', long = "id")]
    pub game_id: String,

    /// File to save.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

/// Download the list of game ids for a season and save it as a CSV or Excel
/// table.
#[derive(Parser, Debug)]
#[command(name = "download-season-game-ids", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct SeasonGameIdsArgs {
    /// Season to pull, e.g. 2015-16.
    #[arg(short, long)]
    pub season: String,

    /// File to save.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Season type: "Regular Season" or "Playoffs".
    #[arg(short = 't', long = "type", value_enum, default_value_t = SeasonType::RegularSeason)]
    pub season_type: SeasonType,
}

/// Download the list of playoff game ids for a season and save it as a CSV or
/// Excel table. The season type is fixed to Playoffs.
#[derive(Parser, Debug)]
#[command(name = "download-season-game-ids-playoffs", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct PlayoffGameIdsArgs {
    /// Season to pull, e.g. 2015-16.
    #[arg(short, long)]
    pub season: String,

    /// File to save.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Excel)]
    pub format: ExportFormat,
}

/// Build a per-player report from previously downloaded play-by-play logs.
///
/// Reads `<data-dir>/<season>/*.csv` (as written by download-play-by-play)
/// together with `<data-dir>/<season>/players.dat` (one player name per
/// line) and writes the report as CSV.
#[derive(Parser, Debug)]
#[command(name = "analyze-play-by-play", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct AnalyzeArgs {
    /// Season ids to analyze (comma separated), e.g. 2016_17.
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub seasons: Vec<String>,

    /// File to save.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Directory holding the per-season game files.
    #[arg(short = 'd', long = "data-dir", default_value = "data")]
    pub data_dir: PathBuf,

    /// Report to produce.
    #[arg(short, long, value_enum, default_value_t = ReportKind::HotCold)]
    pub report: ReportKind,
}
