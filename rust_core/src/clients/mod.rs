pub mod nba_stats;
pub mod result_set;

// Re-export commonly used types
pub use nba_stats::{NbaStatsClient, NbaStatsConfig};
pub use result_set::{ResultSet, StatsResponse};
