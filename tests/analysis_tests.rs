//! End-to-end analysis tests: downloaded play-by-play CSVs in, report out.

use nbastats::cli::{AnalyzeArgs, ReportKind};
use nbastats::commands;
use std::path::Path;

const GAME_CSV: &str = "\
,GAME_ID,PERIOD,PCTIMESTRING,HOMEDESCRIPTION,VISITORDESCRIPTION,PLAYER1_NAME
0,0021600001,1,12:00,Jump Ball Smith vs. Jones,,Smith
1,0021600001,1,11:00,Smith 26' 3PT Jump Shot (3 PTS),,Smith
2,0021600001,1,10:30,Smith 25' 3PT Jump Shot (6 PTS),,Smith
3,0021600001,1,9:45,Timeout: Regular,,
4,0021600001,1,5:00,,MISS Smith 26' 3PT Jump Shot,Smith
";

fn write_season(data_dir: &Path, season_id: &str) {
    let season_dir = data_dir.join(season_id);
    std::fs::create_dir_all(&season_dir).unwrap();
    std::fs::write(season_dir.join("0021600001.csv"), GAME_CSV).unwrap();
    std::fs::write(season_dir.join("players.dat"), "Smith\nJones\n").unwrap();
}

#[test]
fn hot_cold_report_splits_attempts_around_the_window() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    write_season(&data_dir, "2016_17");

    let output = dir.path().join("report.csv");
    let args = AnalyzeArgs {
        seasons: vec!["2016_17".to_string()],
        output: output.clone(),
        data_dir,
        report: ReportKind::HotCold,
    };
    commands::run_analyze(&args).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name,Total 3P Made,Total 3P Att"));

    // The make at 11:00 is cold (first attempt), the one at 10:30 lands 30s
    // later inside the 2-minute window, and the miss at 5:00 is cold again.
    let smith: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(smith[0], "smith");
    assert_eq!(&smith[1..3], ["2", "3"]);
    assert_eq!(smith[3], (2.0f64 / 3.0 * 100.0).to_string());
    assert_eq!(&smith[4..7], ["1", "2", "50"]);
    assert_eq!(&smith[7..10], ["1", "1", "100"]);
    assert_eq!(smith[10], "50");
    assert_eq!(smith[11], (1.0f64 / 3.0 * 100.0).to_string());

    // Listed player with no attempts still gets a (zeroed) row.
    let jones: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(jones[0], "jones");
    assert_eq!(&jones[1..4], ["0", "0", "0"]);
}

#[test]
fn hot_cold_report_merges_stats_across_seasons() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    write_season(&data_dir, "2015_16");
    write_season(&data_dir, "2016_17");

    let output = dir.path().join("report.csv");
    let args = AnalyzeArgs {
        seasons: vec!["2015_16".to_string(), "2016_17".to_string()],
        output: output.clone(),
        data_dir,
        report: ReportKind::HotCold,
    };
    commands::run_analyze(&args).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let smith: Vec<&str> = content.lines().nth(1).unwrap().split(',').collect();
    // double the single-season counts, one row per player
    assert_eq!(&smith[1..3], ["4", "6"]);
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn points_report_counts_games_and_points() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    write_season(&data_dir, "2016_17");

    let output = dir.path().join("points.csv");
    let args = AnalyzeArgs {
        seasons: vec!["2016_17".to_string()],
        output: output.clone(),
        data_dir,
        report: ReportKind::Points,
    };
    commands::run_analyze(&args).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "PLAYER,GAMES,POINTS,PPG");
    // two made threes; the jump ball marks the game played but scores nothing
    assert_eq!(lines[1], "smith,1,6,6");
    assert_eq!(lines[2], "jones,0,0,0");
}

#[test]
fn missing_season_directory_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        seasons: vec!["1998_99".to_string()],
        output: dir.path().join("report.csv"),
        data_dir: dir.path().join("data"),
        report: ReportKind::HotCold,
    };
    assert!(commands::run_analyze(&args).is_err());
}
