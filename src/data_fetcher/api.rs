use crate::cli::SeasonType;
use crate::config::ClientConfig;
use crate::constants::{
    DEFAULT_COUNTER, DEFAULT_DIRECTION, DEFAULT_END_PERIOD, DEFAULT_SORTER, DEFAULT_START_PERIOD,
    LEAGUE_GAME_LOG_ENDPOINT, LEAGUE_ID_NBA, PLAYER_OR_TEAM_TEAM, PLAY_BY_PLAY_ENDPOINT,
    STATS_ORIGIN_HEADER, STATS_ORIGIN_VALUE, STATS_REFERER, STATS_TOKEN_HEADER, STATS_TOKEN_VALUE,
    STATS_USER_AGENT,
};
use crate::data_fetcher::models::{ResultSet, StatsResponse};
use crate::error::AppError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// The remote statistics API as seen by the command pipelines.
///
/// Modeled as a trait so the pipelines can run against a test double or a
/// mock server instead of the live service.
#[allow(async_fn_in_trait)]
pub trait StatsApi {
    /// Fetches the play-by-play event log for one game.
    async fn fetch_play_by_play(&self, game_id: &str) -> Result<ResultSet, AppError>;

    /// Fetches the per-game log records for a season and season type.
    async fn fetch_season_game_ids(
        &self,
        season: &str,
        season_type: SeasonType,
    ) -> Result<ResultSet, AppError>;
}

/// HTTP client for stats.nba.com. Issues exactly one request per fetch call;
/// failures propagate to the caller without retries.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
}

impl NbaStatsClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .default_headers(default_headers())
            .build()?;
        Ok(NbaStatsClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl StatsApi for NbaStatsClient {
    async fn fetch_play_by_play(&self, game_id: &str) -> Result<ResultSet, AppError> {
        let url = format!("{}/{}", self.base_url, PLAY_BY_PLAY_ENDPOINT);
        let params = [
            ("GameID", game_id),
            ("StartPeriod", DEFAULT_START_PERIOD),
            ("EndPeriod", DEFAULT_END_PERIOD),
        ];
        let response: StatsResponse = fetch(&self.client, &url, &params).await?;
        Ok(response.into())
    }

    async fn fetch_season_game_ids(
        &self,
        season: &str,
        season_type: SeasonType,
    ) -> Result<ResultSet, AppError> {
        let url = format!("{}/{}", self.base_url, LEAGUE_GAME_LOG_ENDPOINT);
        let params = [
            ("Season", season),
            ("SeasonType", season_type.as_str()),
            ("LeagueID", LEAGUE_ID_NBA),
            ("PlayerOrTeam", PLAYER_OR_TEAM_TEAM),
            ("Counter", DEFAULT_COUNTER),
            ("Sorter", DEFAULT_SORTER),
            ("Direction", DEFAULT_DIRECTION),
        ];
        let response: StatsResponse = fetch(&self.client, &url, &params).await?;
        Ok(response.into())
    }
}

// The stats API refuses requests that don't look like they come from the
// site's own frontend.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(STATS_USER_AGENT));
    headers.insert(REFERER, HeaderValue::from_static(STATS_REFERER));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        STATS_ORIGIN_HEADER,
        HeaderValue::from_static(STATS_ORIGIN_VALUE),
    );
    headers.insert(
        STATS_TOKEN_HEADER,
        HeaderValue::from_static(STATS_TOKEN_VALUE),
    );
    headers
}

#[instrument(skip(client, params))]
async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, &str)],
) -> Result<T, AppError> {
    info!("Fetching data from URL: {}", url);
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| map_send_error(e, url))?;
    let status = response.status();

    info!("Response status: {}", status);
    debug!("Response headers: {:?}", response.headers());

    if !status.is_success() {
        return Err(map_status_error(status, url));
    }

    let response_text = response.text().await?;
    info!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            Err(AppError::ApiParse(e))
        }
    }
}

fn map_send_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        error!("Network timeout while fetching: {}", url);
        AppError::network_timeout(url)
    } else if e.is_connect() {
        error!("Connection failed to {}: {}", url, e);
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

fn map_status_error(status: StatusCode, url: &str) -> AppError {
    let message = status.canonical_reason().unwrap_or("Unknown error");
    error!("API request failed: {} (URL: {})", status, url);
    match status {
        StatusCode::NOT_FOUND => AppError::api_not_found(url),
        StatusCode::TOO_MANY_REQUESTS => AppError::api_rate_limit(message, url),
        s if s.is_server_error() => AppError::api_server_error(s.as_u16(), message, url),
        s => AppError::api_client_error(s.as_u16(), message, url),
    }
}
