//! Recent form: a team's scoring over its latest games.

use crate::stats::GameLogRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of most recent games that make up recent form.
pub const RECENT_GAMES: usize = 10;

/// Points scored in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScore {
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    pub points: f64,
}

impl GameScore {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentForm {
    /// Most recent first, at most RECENT_GAMES entries
    pub games: Vec<GameScore>,
    /// Mean points over `games`; exactly 0 when there are none
    pub average_points: f64,
}

impl RecentForm {
    /// Build from a game log ordered most recent first.
    pub fn from_game_log(rows: &[GameLogRow]) -> Self {
        let games: Vec<GameScore> = rows
            .iter()
            .take(RECENT_GAMES)
            .map(|row| GameScore {
                date: row.game_date,
                points: row.points,
            })
            .collect();

        let average_points = mean(games.iter().map(|g| g.points));
        Self {
            games,
            average_points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(points: &[f64]) -> Vec<GameLogRow> {
        let start = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| GameLogRow {
                game_date: start - chrono::Duration::days(2 * i as i64),
                points: p,
            })
            .collect()
    }

    #[test]
    fn test_mean_of_recent_games() {
        let form = RecentForm::from_game_log(&log(&[100.0, 110.0, 90.0, 105.0, 95.0]));
        assert_eq!(form.games.len(), 5);
        assert!((form.average_points - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_log_averages_zero() {
        let form = RecentForm::from_game_log(&[]);
        assert!(form.is_empty());
        assert_eq!(form.average_points, 0.0);
    }

    #[test]
    fn test_truncates_to_most_recent_ten() {
        let points: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let form = RecentForm::from_game_log(&log(&points));

        assert_eq!(form.games.len(), RECENT_GAMES);
        assert_eq!(form.games[0].points, 100.0);
        assert_eq!(form.games[9].points, 109.0);
        // Mean of 100..=109
        assert!((form.average_points - 104.5).abs() < 1e-9);
    }

    #[test]
    fn test_dates_keep_order_and_format() {
        let form = RecentForm::from_game_log(&log(&[101.0, 99.0]));
        assert_eq!(form.games[0].date_label(), "2025-03-31");
        assert_eq!(form.games[1].date_label(), "2025-03-29");
    }
}
