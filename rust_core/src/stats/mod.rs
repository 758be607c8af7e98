//! Upstream statistics source abstraction
//!
//! Defines the StatsSource trait the matchup pipeline fetches through, the
//! row types each query yields, and the error every query can fail with.
//! The HTTP implementation lives in `clients::nba_stats`; `memory` holds an
//! in-process source for offline runs and tests.

use crate::season::Season;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;

pub use memory::StaticStatsSource;

/// Error from a single upstream query.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("result set {0} missing from response")]
    MissingResultSet(String),

    #[error("column {column} missing from result set {result_set}")]
    MissingColumn { result_set: String, column: String },

    #[error("invalid {column} value {value} in result set {result_set}")]
    InvalidValue {
        result_set: String,
        column: String,
        value: String,
    },

    #[error("stats source unavailable: {0}")]
    Unavailable(String),
}

/// One game from a team's game log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRow {
    pub game_date: NaiveDate,
    pub points: f64,
}

/// Season totals for one player on a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTotalsRow {
    pub player_name: String,
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

/// One team's row in the league standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: u32,
    pub team_name: String,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub win_pct: f64,
}

/// Source of the three per-season queries the dashboard needs.
///
/// Implementations apply their own pacing; callers may issue queries
/// concurrently.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Team game log, most recent game first.
    async fn team_game_log(&self, team_id: u32, season: Season)
        -> Result<Vec<GameLogRow>, StatsError>;

    /// Season totals for every player who appeared for the team.
    async fn team_player_totals(
        &self,
        team_id: u32,
        season: Season,
    ) -> Result<Vec<PlayerTotalsRow>, StatsError>;

    /// League-wide standings for the season.
    async fn league_standings(&self, season: Season) -> Result<Vec<StandingRow>, StatsError>;

    /// Source name for logging
    fn source_name(&self) -> &str;
}
