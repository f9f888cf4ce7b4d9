//! Constants for the stats.nba.com endpoints and export pipeline.

use std::time::Duration;

/// Base URL of the NBA statistics API. Can be overridden with the
/// `NBA_STATS_BASE_URL` environment variable (see [`crate::config::ClientConfig`]).
pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com";

/// Default HTTP timeout in seconds for API requests.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Endpoint serving the per-game play-by-play event log.
pub const PLAY_BY_PLAY_ENDPOINT: &str = "stats/playbyplayv2";

/// Endpoint serving the league-wide game log for a season.
pub const LEAGUE_GAME_LOG_ENDPOINT: &str = "stats/leaguegamelog";

/// Name of the result set carrying play-by-play rows.
pub const PLAY_BY_PLAY_RESULT_SET: &str = "PlayByPlay";

/// Name of the result set carrying season game log rows.
pub const LEAGUE_GAME_LOG_RESULT_SET: &str = "LeagueGameLog";

/// Fixed pause after a successful play-by-play download, to stay under the
/// nba.com rate limits. Applied only by the play-by-play command; the season
/// game-id commands never slept in the original tooling and still don't.
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(1);

// stats.nba.com rejects requests without a browser-like header set.
pub const STATS_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const STATS_REFERER: &str = "https://stats.nba.com/";
pub const STATS_ORIGIN_HEADER: &str = "x-nba-stats-origin";
pub const STATS_ORIGIN_VALUE: &str = "stats";
pub const STATS_TOKEN_HEADER: &str = "x-nba-stats-token";
pub const STATS_TOKEN_VALUE: &str = "true";

// Fixed query parameters for the play-by-play endpoint. Period 0 through 14
// covers regulation plus any realistic number of overtimes.
pub const DEFAULT_START_PERIOD: &str = "0";
pub const DEFAULT_END_PERIOD: &str = "14";

// Fixed query parameters for the league game log endpoint.
pub const LEAGUE_ID_NBA: &str = "00";
pub const PLAYER_OR_TEAM_TEAM: &str = "T";
pub const DEFAULT_COUNTER: &str = "1000";
pub const DEFAULT_SORTER: &str = "DATE";
pub const DEFAULT_DIRECTION: &str = "ASC";
