//! Team standing lookup within the league table.

use crate::stats::StandingRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// In [0, 1]
    pub win_pct: f64,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

/// Standing for `team_id`, or None if the team is not in the table.
pub fn find_standing(rows: &[StandingRow], team_id: u32) -> Option<Standing> {
    rows.iter().find(|row| row.team_id == team_id).map(|row| Standing {
        win_pct: row.win_pct,
        wins: row.wins,
        losses: row.losses,
    })
}

/// Win percentage the predictor compares; an absent standing counts as 0.
pub fn win_pct_or_zero(standing: Option<&Standing>) -> f64 {
    standing.map(|s| s.win_pct).unwrap_or(0.0)
}
