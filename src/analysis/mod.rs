pub mod game_log;
pub mod reports;

pub use game_log::{GameEvent, Season};
pub use reports::{hot_cold_report, points_report, write_report};
