pub mod api;
pub mod models;

pub use api::{NbaStatsClient, StatsApi};
pub use models::{ResultSet, Row, StatsResponse};
