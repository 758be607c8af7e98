//! Heuristic winner call from recent scoring and win percentage.
//!
//! Each side earns one point for every metric it leads strictly. The home
//! side also starts from a 0.5 base, so an even split of the two metrics
//! goes to the home team.

use serde::{Deserialize, Serialize};

/// Base awarded to the home side only.
pub const HOME_BASE: f64 = 0.5;

/// Inputs for one side of the matchup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideMetrics {
    pub average_points: f64,
    pub win_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Home,
    Away,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub home_score: f64,
    pub away_score: f64,
    pub verdict: Verdict,
}

fn lead(a: f64, b: f64) -> f64 {
    if a > b {
        1.0
    } else {
        0.0
    }
}

pub fn predict(home: SideMetrics, away: SideMetrics) -> Prediction {
    let home_score = HOME_BASE
        + lead(home.average_points, away.average_points)
        + lead(home.win_pct, away.win_pct);
    let away_score =
        lead(away.average_points, home.average_points) + lead(away.win_pct, home.win_pct);

    let verdict = if home_score > away_score {
        Verdict::Home
    } else if away_score > home_score {
        Verdict::Away
    } else {
        Verdict::Tie
    };

    Prediction {
        home_score,
        away_score,
        verdict,
    }
}
