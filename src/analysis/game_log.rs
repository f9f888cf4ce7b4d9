//! Loading downloaded play-by-play CSVs into per-season event logs.
//!
//! A season lives under `<data-dir>/<season-id>/`: one CSV per game as
//! written by the play-by-play download command, plus a `players.dat` file
//! naming the players to report on, one per line.

use crate::error::AppError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Seconds in one regulation quarter.
pub const QUARTER_TIME_SEC: i64 = 12 * 60;

// Columns of the exported play-by-play table the analysis reads.
const TIME_COLUMN: &str = "PCTIMESTRING";
const PERIOD_COLUMN: &str = "PERIOD";
const PLAYER_COLUMN: &str = "PLAYER1_NAME";
const HOME_DESC_COLUMN: &str = "HOMEDESCRIPTION";
const AWAY_DESC_COLUMN: &str = "VISITORDESCRIPTION";

/// Name of the per-season player list file.
const PLAYERS_FILE: &str = "players.dat";

/// One event from a play-by-play log, reduced to what the reports need.
#[derive(Debug, Clone)]
pub struct GameEvent {
    /// Acting player's name, lowercased.
    pub player: String,
    /// Home and visitor descriptions concatenated, lowercased.
    pub desc: String,
    /// Seconds elapsed since the start of the game. Overtime periods are
    /// treated as full quarters, as the original reports did.
    pub time_sec: i64,
    pub period: i64,
}

impl GameEvent {
    /// Three-point attempt (made or missed).
    pub fn is_3pa(&self) -> bool {
        self.desc.contains("3pt")
    }

    /// Made three-pointer.
    pub fn is_3pm(&self) -> bool {
        self.desc.contains("3pt") && !self.desc.contains("miss")
    }

    /// Made field goal, threes included.
    pub fn is_fgm(&self) -> bool {
        !self.desc.contains("free throw") && self.desc.contains("pts")
    }

    /// Made free throw.
    pub fn is_ftm(&self) -> bool {
        self.desc.contains("free throw") && self.desc.contains("pts")
    }
}

/// Positions of the columns the analysis reads, resolved from a game file's
/// header row.
struct ColumnLayout {
    time: usize,
    period: usize,
    player: usize,
    home_desc: usize,
    away_desc: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Option<ColumnLayout> {
        let index_of = |name: &str| headers.iter().position(|header| header == name);
        Some(ColumnLayout {
            time: index_of(TIME_COLUMN)?,
            period: index_of(PERIOD_COLUMN)?,
            player: index_of(PLAYER_COLUMN)?,
            home_desc: index_of(HOME_DESC_COLUMN)?,
            away_desc: index_of(AWAY_DESC_COLUMN)?,
        })
    }
}

/// Builds an event from one CSV record. Returns `None` for rows the reports
/// cannot use: no acting player, or a clock/period value that doesn't parse
/// (timeouts, period markers and the like).
fn event_from_record(layout: &ColumnLayout, record: &csv::StringRecord) -> Option<GameEvent> {
    let player = record.get(layout.player)?.trim().to_lowercase();
    if player.is_empty() {
        return None;
    }

    let (minutes, seconds) = record.get(layout.time)?.split_once(':')?;
    let min_left: i64 = minutes.trim().parse().ok()?;
    let sec_left: i64 = seconds.trim().parse().ok()?;
    let period: i64 = record.get(layout.period)?.trim().parse().ok()?;

    let period_base_sec = (period - 1) * QUARTER_TIME_SEC;
    let time_sec = QUARTER_TIME_SEC - (min_left * 60 + sec_left) + period_base_sec;

    let desc = format!(
        "{}{}",
        record.get(layout.home_desc).unwrap_or_default(),
        record.get(layout.away_desc).unwrap_or_default()
    )
    .to_lowercase();

    Some(GameEvent {
        player,
        desc,
        time_sec,
        period,
    })
}

/// One season's worth of downloaded game logs plus the players to report on.
#[derive(Debug, Clone)]
pub struct Season {
    pub id: String,
    /// Player names from `players.dat`, lowercased, in file order.
    pub players: Vec<String>,
    /// One event list per game file, in file-name order.
    pub games: Vec<Vec<GameEvent>>,
}

impl Season {
    /// Loads every game CSV and the player list for `season_id` under
    /// `data_dir`.
    pub fn load(data_dir: &Path, season_id: &str) -> Result<Season, AppError> {
        let season_dir = data_dir.join(season_id);
        let players = read_players_file(&season_dir.join(PLAYERS_FILE))?;

        let mut game_files: Vec<PathBuf> = std::fs::read_dir(&season_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        game_files.sort();

        let mut games = Vec::with_capacity(game_files.len());
        for file in &game_files {
            let events = read_game_file(file)?;
            debug!("Loaded {} events from {}", events.len(), file.display());
            games.push(events);
        }

        info!("Built season {} with {} games", season_id, games.len());
        Ok(Season {
            id: season_id.to_string(),
            players,
            games,
        })
    }
}

fn read_game_file(path: &Path) -> Result<Vec<GameEvent>, AppError> {
    let mut reader = csv::Reader::from_path(path)?;
    let layout = ColumnLayout::from_headers(reader.headers()?).ok_or_else(|| {
        AppError::analysis_input(format!(
            "{} is missing play-by-play columns",
            path.display()
        ))
    })?;

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(event) = event_from_record(&layout, &record) {
            events.push(event);
        }
    }
    Ok(events)
}

/// Reads the player list: one name per line, lowercased, blank lines skipped.
fn read_players_file(path: &Path) -> Result<Vec<String>, AppError> {
    let file = File::open(path)?;
    let mut players = Vec::new();
    for line in BufReader::new(file).lines() {
        let player = line?.trim().to_lowercase();
        if !player.is_empty() {
            players.push(player);
        }
    }
    Ok(players)
}
