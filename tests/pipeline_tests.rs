//! End-to-end pipeline tests: mock API server in, CSV/Excel artifact out.

use calamine::{Reader, Xlsx, open_workbook};
use nbastats::cli::{ExportFormat, PlayByPlayArgs, PlayoffGameIdsArgs, SeasonGameIdsArgs, SeasonType};
use nbastats::commands;
use nbastats::config::ClientConfig;
use nbastats::data_fetcher::NbaStatsClient;
use serde_json::json;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NbaStatsClient {
    let config = ClientConfig {
        base_url: server.uri(),
        http_timeout_seconds: 5,
    };
    NbaStatsClient::new(&config).expect("client should build")
}

fn play_by_play_body() -> serde_json::Value {
    json!({
        "resource": "playbyplay",
        "parameters": {"GameID": "0020901003"},
        "resultSets": [{
            "name": "PlayByPlay",
            "headers": ["GAME_ID", "EVENTNUM", "PERIOD", "PCTIMESTRING", "HOMEDESCRIPTION"],
            "rowSet": [
                ["0020901003", 1, 1, "12:00", null],
                ["0020901003", 2, 1, "11:42", "Jump Ball"],
                ["0020901003", 3, 1, "11:21", null]
            ]
        }]
    })
}

fn game_log_body() -> serde_json::Value {
    json!({
        "resultSets": [{
            "name": "LeagueGameLog",
            "headers": ["GAME_ID", "GAME_DATE", "MATCHUP"],
            "rowSet": [
                ["0021500001", "2015-10-27", "ATL vs. DET"],
                ["0021500001", "2015-10-27", "DET @ ATL"],
                ["0021500002", "2015-10-27", "CHI vs. CLE"]
            ]
        }]
    })
}

async fn mount_play_by_play(server: &MockServer, expect: u64) {
    Mock::given(method("GET"))
        .and(path("/stats/playbyplayv2"))
        .and(query_param("GameID", "0020901003"))
        .respond_with(ResponseTemplate::new(200).set_body_json(play_by_play_body()))
        .expect(expect)
        .mount(server)
        .await;
}

#[tokio::test]
async fn play_by_play_csv_has_one_line_per_event() {
    let server = MockServer::start().await;
    mount_play_by_play(&server, 1).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pbp.csv");
    let args = PlayByPlayArgs {
        game_id: "0020901003".to_string(),
        output: output.clone(),
        format: ExportFormat::Csv,
    };

    commands::run_play_by_play(&client_for(&server), &args)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        ",GAME_ID,EVENTNUM,PERIOD,PCTIMESTRING,HOMEDESCRIPTION"
    );
    // One row per result-set entry, in received order, with a 0-based index.
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "0,0020901003,1,1,12:00,");
    assert_eq!(lines[2], "1,0020901003,2,1,11:42,Jump Ball");
    assert_eq!(lines[3], "2,0020901003,3,1,11:21,");
}

#[tokio::test]
async fn play_by_play_delays_completion_by_a_second() {
    let server = MockServer::start().await;
    mount_play_by_play(&server, 1).await;

    let dir = tempfile::tempdir().unwrap();
    let args = PlayByPlayArgs {
        game_id: "0020901003".to_string(),
        output: dir.path().join("pbp.csv"),
        format: ExportFormat::Csv,
    };

    let started = Instant::now();
    commands::run_play_by_play(&client_for(&server), &args)
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn play_by_play_fetch_failure_skips_write_and_sleep() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/playbyplayv2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pbp.csv");
    let args = PlayByPlayArgs {
        game_id: "0020901003".to_string(),
        output: output.clone(),
        format: ExportFormat::Csv,
    };

    let started = Instant::now();
    let result = commands::run_play_by_play(&client_for(&server), &args).await;
    assert!(result.is_err());
    assert!(!output.exists());
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn play_by_play_csv_is_idempotent_across_runs() {
    let server = MockServer::start().await;
    mount_play_by_play(&server, 2).await;

    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    for output in [&first, &second] {
        let args = PlayByPlayArgs {
            game_id: "0020901003".to_string(),
            output: output.clone(),
            format: ExportFormat::Csv,
        };
        commands::run_play_by_play(&client_for(&server), &args)
            .await
            .unwrap();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[tokio::test]
async fn season_game_ids_exports_rows_in_received_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/leaguegamelog"))
        .and(query_param("Season", "2015-16"))
        .and(query_param("SeasonType", "Regular Season"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ids.csv");
    let args = SeasonGameIdsArgs {
        season: "2015-16".to_string(),
        output: output.clone(),
        format: ExportFormat::Csv,
        season_type: SeasonType::RegularSeason,
    };

    commands::run_season_game_ids(&client_for(&server), &args)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], ",GAME_ID,GAME_DATE,MATCHUP");
    // 1:1 with the fetched entries, duplicates and all.
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "0,0021500001,2015-10-27,ATL vs. DET");
    assert_eq!(lines[2], "1,0021500001,2015-10-27,DET @ ATL");
    assert_eq!(lines[3], "2,0021500002,2015-10-27,CHI vs. CLE");
}

#[tokio::test]
async fn playoffs_variant_always_requests_playoffs() {
    let server = MockServer::start().await;
    // The mock only matches SeasonType=Playoffs; expect(1) fails the test if
    // the command asked for anything else.
    Mock::given(method("GET"))
        .and(path("/stats/leaguegamelog"))
        .and(query_param("Season", "2015-16"))
        .and(query_param("SeasonType", "Playoffs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_log_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let args = PlayoffGameIdsArgs {
        season: "2015-16".to_string(),
        output: dir.path().join("ids.csv"),
        format: ExportFormat::Csv,
    };

    commands::run_playoff_game_ids(&client_for(&server), &args)
        .await
        .unwrap();
}

#[tokio::test]
async fn excel_header_matches_csv_header() {
    let server = MockServer::start().await;
    mount_play_by_play(&server, 2).await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("pbp.csv");
    let xlsx_path = dir.path().join("pbp.xlsx");

    for (output, format) in [
        (csv_path.clone(), ExportFormat::Csv),
        (xlsx_path.clone(), ExportFormat::Excel),
    ] {
        let args = PlayByPlayArgs {
            game_id: "0020901003".to_string(),
            output,
            format,
        };
        commands::run_play_by_play(&client_for(&server), &args)
            .await
            .unwrap();
    }

    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    let csv_lines: Vec<&str> = csv_content.lines().collect();
    let csv_header: Vec<&str> = csv_lines[0].split(',').collect();
    assert_eq!(
        csv_header,
        ["", "GAME_ID", "EVENTNUM", "PERIOD", "PCTIMESTRING", "HOMEDESCRIPTION"]
    );

    // Read the workbook back: a single sheet whose header cells match the
    // CSV header fields, with the same number of data rows.
    let mut workbook: Xlsx<_> = open_workbook(&xlsx_path).unwrap();
    let sheet_names = workbook.sheet_names().to_owned();
    assert_eq!(sheet_names.len(), 1);

    let range = workbook.worksheet_range(&sheet_names[0]).unwrap();
    let xlsx_header: Vec<String> = range
        .rows()
        .next()
        .unwrap()
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(xlsx_header, csv_header);
    assert_eq!(range.height(), csv_lines.len());
}

#[tokio::test]
async fn unwritable_output_path_fails_the_run() {
    let server = MockServer::start().await;
    mount_play_by_play(&server, 1).await;

    let args = PlayByPlayArgs {
        game_id: "0020901003".to_string(),
        output: PathBuf::from("/nonexistent-dir/pbp.csv"),
        format: ExportFormat::Csv,
    };

    let result = commands::run_play_by_play(&client_for(&server), &args).await;
    assert!(result.is_err());
}
