//! Roster quality: the leading scorers on a team.

use crate::stats::PlayerTotalsRow;
use serde::{Deserialize, Serialize};

/// How many players make the top-scorer table.
pub const TOP_PLAYERS: usize = 3;

/// Per-game averages for one active player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub name: String,
    pub games_played: u32,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
}

impl PlayerLine {
    /// Per-game rates, or None for a player who has not appeared (injured/inactive).
    pub fn from_totals(row: &PlayerTotalsRow) -> Option<Self> {
        if row.games_played == 0 {
            return None;
        }
        let gp = row.games_played as f64;
        Some(Self {
            name: row.player_name.clone(),
            games_played: row.games_played,
            ppg: row.points / gp,
            rpg: row.rebounds / gp,
            apg: row.assists / gp,
        })
    }
}

/// Top `limit` active players by points per game.
///
/// The sort is stable: players with equal PPG keep their retrieval order.
pub fn top_scorers(rows: &[PlayerTotalsRow], limit: usize) -> Vec<PlayerLine> {
    let mut active: Vec<PlayerLine> = rows.iter().filter_map(PlayerLine::from_totals).collect();
    active.sort_by(|a, b| b.ppg.total_cmp(&a.ppg));
    active.truncate(limit);
    active
}
