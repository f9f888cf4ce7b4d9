//! Per-player reports over loaded seasons: hot/cold 3PT shooting splits and
//! points per game.

use crate::analysis::game_log::Season;
use crate::error::AppError;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Window after a made three during which the next attempt counts as "hot".
pub const HOT_WINDOW_SEC: i64 = 60 * 2;

/// A player's 3PT attempts and makes, split by whether the attempt came
/// inside the hot window after a previous make.
#[derive(Debug, Clone, Default)]
pub struct PlayerSplits {
    pub name: String,
    pub total_makes: u32,
    pub total_chances: u32,
    pub cold_makes: u32,
    pub cold_chances: u32,
    pub hot_makes: u32,
    pub hot_chances: u32,
}

impl PlayerSplits {
    fn new(name: &str) -> PlayerSplits {
        PlayerSplits {
            name: name.to_string(),
            ..PlayerSplits::default()
        }
    }

    fn merge(&mut self, other: &PlayerSplits) {
        self.total_makes += other.total_makes;
        self.total_chances += other.total_chances;
        self.cold_makes += other.cold_makes;
        self.cold_chances += other.cold_chances;
        self.hot_makes += other.hot_makes;
        self.hot_chances += other.hot_chances;
    }

    /// Report row: counts plus derived percentages. A player's first attempt
    /// of a game is always cold, so `cold_chances` is non-zero whenever
    /// `total_chances` is.
    fn to_row(&self) -> Vec<String> {
        let pct = |makes: u32, chances: u32| (f64::from(makes) / f64::from(chances)) * 100.0;

        let (total_pct, cold_pct, hot_pct, hot_makeup) = if self.total_chances == 0 {
            (0.0, 0.0, 0.0, 0.0)
        } else if self.hot_chances == 0 {
            (
                pct(self.total_makes, self.total_chances),
                pct(self.cold_makes, self.cold_chances),
                0.0,
                0.0,
            )
        } else {
            (
                pct(self.total_makes, self.total_chances),
                pct(self.cold_makes, self.cold_chances),
                pct(self.hot_makes, self.hot_chances),
                (f64::from(self.hot_chances) / f64::from(self.total_chances)) * 100.0,
            )
        };
        let hot_cold_diff = hot_pct - cold_pct;

        vec![
            self.name.clone(),
            self.total_makes.to_string(),
            self.total_chances.to_string(),
            total_pct.to_string(),
            self.cold_makes.to_string(),
            self.cold_chances.to_string(),
            cold_pct.to_string(),
            self.hot_makes.to_string(),
            self.hot_chances.to_string(),
            hot_pct.to_string(),
            hot_cold_diff.to_string(),
            hot_makeup.to_string(),
        ]
    }
}

fn hot_cold_header() -> Vec<String> {
    [
        "Name",
        "Total 3P Made",
        "Total 3P Att",
        "Total 3P%",
        "Cold 3P Made",
        "Cold 3P Att",
        "Cold 3P%",
        "Hot 3P Made",
        "Hot 3P Att",
        "Hot 3P%",
        "Hot/Cold Diff",
        "Hot Shot Makeup",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

/// Collects a player's hot/cold splits across one season. The hot clock
/// resets between games; a make re-arms the window, a miss leaves it as-is.
fn collect_hot_cold(season: &Season, player: &str) -> PlayerSplits {
    let mut splits = PlayerSplits::new(player);

    for game in &season.games {
        // 0 doubles as "no make yet"; an opening-tip make at 0s is lost to
        // the sentinel, matching the report this replaces.
        let mut last_3pm: i64 = 0;

        for event in game {
            if !event.player.contains(player) || !event.is_3pa() {
                continue;
            }

            let hot = last_3pm != 0 && event.time_sec <= last_3pm + HOT_WINDOW_SEC;
            if hot {
                splits.hot_chances += 1;
            } else {
                splits.cold_chances += 1;
            }
            if event.is_3pm() {
                if hot {
                    splits.hot_makes += 1;
                } else {
                    splits.cold_makes += 1;
                }
                last_3pm = event.time_sec;
            }
        }
    }

    splits.total_chances = splits.hot_chances + splits.cold_chances;
    splits.total_makes = splits.hot_makes + splits.cold_makes;
    splits
}

/// Builds the hot/cold report: a header row plus one row per player listed in
/// any season's player file, first-seen order, stats merged across seasons.
pub fn hot_cold_report(seasons: &[Season]) -> Vec<Vec<String>> {
    let mut order: Vec<String> = Vec::new();
    let mut by_player: HashMap<String, PlayerSplits> = HashMap::new();

    for season in seasons {
        for player in &season.players {
            info!("Collecting stats for {} from season {}", player, season.id);
            let splits = collect_hot_cold(season, player);
            match by_player.get_mut(player) {
                Some(existing) => existing.merge(&splits),
                None => {
                    order.push(player.clone());
                    by_player.insert(player.clone(), splits);
                }
            }
        }
    }

    let mut rows = Vec::with_capacity(order.len() + 1);
    rows.push(hot_cold_header());
    for player in &order {
        rows.push(by_player[player].to_row());
    }
    rows
}

/// Points a player scored in one season and the games they appeared in.
fn collect_points(season: &Season, player: &str) -> (u32, u32) {
    let mut games = 0;
    let mut points = 0;

    for game in &season.games {
        let mut in_game = false;
        let mut game_points = 0;

        for event in game {
            if !event.player.contains(player) {
                continue;
            }
            in_game = true;
            if event.is_3pm() {
                game_points += 3;
            } else if event.is_fgm() {
                game_points += 2;
            } else if event.is_ftm() {
                game_points += 1;
            }
        }

        if in_game {
            games += 1;
            points += game_points;
        }
    }

    (games, points)
}

/// Builds the points report: games, points, and points per game for each
/// listed player, merged across seasons in first-seen order.
pub fn points_report(seasons: &[Season]) -> Vec<Vec<String>> {
    let mut order: Vec<String> = Vec::new();
    let mut by_player: HashMap<String, (u32, u32)> = HashMap::new();

    for season in seasons {
        for player in &season.players {
            let (games, points) = collect_points(season, player);
            match by_player.get_mut(player) {
                Some((total_games, total_points)) => {
                    *total_games += games;
                    *total_points += points;
                }
                None => {
                    order.push(player.clone());
                    by_player.insert(player.clone(), (games, points));
                }
            }
        }
    }

    let mut rows = Vec::with_capacity(order.len() + 1);
    rows.push(
        ["PLAYER", "GAMES", "POINTS", "PPG"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
    );
    for player in &order {
        let (games, points) = by_player[player];
        let ppg = if points == 0 {
            0.0
        } else {
            f64::from(points) / f64::from(games)
        };
        rows.push(vec![
            player.clone(),
            games.to_string(),
            points.to_string(),
            ppg.to_string(),
        ]);
    }
    rows
}

/// Writes report rows (header included) as plain CSV.
pub fn write_report(rows: &[Vec<String>], path: &Path) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    info!(
        "Wrote {} rows to {}",
        rows.len().saturating_sub(1),
        path.display()
    );
    Ok(())
}
