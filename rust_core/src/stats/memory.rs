//! In-memory stats source.
//!
//! Serves fixed tables and can be told to fail any query category. Used by
//! offline runs and by the pipeline tests.

use super::{GameLogRow, PlayerTotalsRow, StandingRow, StatsError, StatsSource};
use crate::season::Season;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Query category, used for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    GameLog,
    PlayerTotals,
    Standings,
}

#[derive(Debug, Default)]
pub struct StaticStatsSource {
    game_logs: HashMap<u32, Vec<GameLogRow>>,
    players: HashMap<u32, Vec<PlayerTotalsRow>>,
    standings: Vec<StandingRow>,
    failing: HashSet<Query>,
    /// team ids whose game log query fails
    failing_game_logs: HashSet<u32>,
    calls: AtomicUsize,
}

impl StaticStatsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game_log(mut self, team_id: u32, rows: Vec<GameLogRow>) -> Self {
        self.game_logs.insert(team_id, rows);
        self
    }

    pub fn with_players(mut self, team_id: u32, rows: Vec<PlayerTotalsRow>) -> Self {
        self.players.insert(team_id, rows);
        self
    }

    pub fn with_standings(mut self, rows: Vec<StandingRow>) -> Self {
        self.standings = rows;
        self
    }

    /// Make every query of this category fail.
    pub fn failing(mut self, query: Query) -> Self {
        self.failing.insert(query);
        self
    }

    /// Make only this team's game log query fail.
    pub fn failing_game_log_for(mut self, team_id: u32) -> Self {
        self.failing_game_logs.insert(team_id);
        self
    }

    /// Number of queries served so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn record(&self, query: Query) -> Result<(), StatsError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(&query) {
            return Err(StatsError::Unavailable(format!("{:?} query disabled", query)));
        }
        Ok(())
    }
}

#[async_trait]
impl StatsSource for StaticStatsSource {
    async fn team_game_log(
        &self,
        team_id: u32,
        _season: Season,
    ) -> Result<Vec<GameLogRow>, StatsError> {
        self.record(Query::GameLog)?;
        if self.failing_game_logs.contains(&team_id) {
            return Err(StatsError::Unavailable(format!(
                "game log for team {} disabled",
                team_id
            )));
        }
        Ok(self.game_logs.get(&team_id).cloned().unwrap_or_default())
    }

    async fn team_player_totals(
        &self,
        team_id: u32,
        _season: Season,
    ) -> Result<Vec<PlayerTotalsRow>, StatsError> {
        self.record(Query::PlayerTotals)?;
        Ok(self.players.get(&team_id).cloned().unwrap_or_default())
    }

    async fn league_standings(&self, _season: Season) -> Result<Vec<StandingRow>, StatsError> {
        self.record(Query::Standings)?;
        Ok(self.standings.clone())
    }

    fn source_name(&self) -> &str {
        "static"
    }
}
