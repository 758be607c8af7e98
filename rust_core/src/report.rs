//! Structured result of one matchup request.
//!
//! The report carries everything a renderer needs: per-team sections, chart
//! data shaped for a line chart and a donut chart, the prediction, and every
//! fetch problem that was degraded to a default.

use crate::form::{GameScore, RecentForm};
use crate::predict::{Prediction, Verdict};
use crate::roster::PlayerLine;
use crate::season::Season;
use crate::standings::Standing;
use crate::teams::TeamRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which upstream query a problem came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchCategory {
    GameLog,
    Players,
    Standing,
}

impl fmt::Display for FetchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchCategory::GameLog => "game logs",
            FetchCategory::Players => "player stats",
            FetchCategory::Standing => "team record",
        };
        f.write_str(label)
    }
}

/// A fetch that failed and was replaced by an empty/zero default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchIssue {
    pub team: String,
    pub category: FetchCategory,
    pub message: String,
}

impl fmt::Display for FetchIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error fetching {} for {}: {}", self.category, self.team, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: TeamRef,
    pub form: RecentForm,
    pub top_players: Vec<PlayerLine>,
    /// None when the standing could not be found, as opposed to a real 0.0
    pub standing: Option<Standing>,
}

impl TeamReport {
    pub fn name(&self) -> &str {
        &self.team.full_name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsSeries {
    pub team: String,
    pub games: Vec<GameScore>,
}

/// Line chart of points per game over the recent games of both teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsChart {
    pub title: String,
    pub series: Vec<PointsSeries>,
}

impl PointsChart {
    /// Only drawn when both teams have at least one game.
    pub fn build(home: &TeamReport, away: &TeamReport) -> Option<Self> {
        if home.form.is_empty() || away.form.is_empty() {
            return None;
        }
        Some(Self {
            title: format!(
                "{} vs {} Points Per Game (Last {} Games)",
                home.name(),
                away.name(),
                crate::form::RECENT_GAMES
            ),
            series: [home, away]
                .iter()
                .map(|t| PointsSeries {
                    team: t.name().to_string(),
                    games: t.form.games.clone(),
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinPctSlice {
    pub team: String,
    pub win_pct: f64,
    /// Fraction of the donut, slices sum to 1
    pub share: f64,
}

/// Donut chart comparing the two win percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinPctChart {
    pub title: String,
    pub slices: Vec<WinPctSlice>,
}

impl WinPctChart {
    /// Only drawn when both standings are known and not both zero.
    pub fn build(home: &TeamReport, away: &TeamReport) -> Option<Self> {
        let home_pct = home.standing.as_ref()?.win_pct;
        let away_pct = away.standing.as_ref()?.win_pct;
        let total = home_pct + away_pct;
        if total <= 0.0 {
            return None;
        }

        Some(Self {
            title: "Win Percentage Comparison".to_string(),
            slices: vec![
                WinPctSlice {
                    team: home.name().to_string(),
                    win_pct: home_pct,
                    share: home_pct / total,
                },
                WinPctSlice {
                    team: away.name().to_string(),
                    win_pct: away_pct,
                    share: away_pct / total,
                },
            ],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    pub season: Season,
    pub home: TeamReport,
    pub away: TeamReport,
    pub points_chart: Option<PointsChart>,
    pub win_pct_chart: Option<WinPctChart>,
    pub prediction: Prediction,
    pub issues: Vec<FetchIssue>,
}

impl MatchupReport {
    /// Name of the predicted winner, None on a tie.
    pub fn predicted_winner(&self) -> Option<&str> {
        match self.prediction.verdict {
            Verdict::Home => Some(self.home.name()),
            Verdict::Away => Some(self.away.name()),
            Verdict::Tie => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::TeamDirectory;
    use chrono::NaiveDate;

    fn team_report(name: &str, points: &[f64], win_pct: Option<f64>) -> TeamReport {
        let dir = TeamDirectory::nba();
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let games: Vec<GameScore> = points
            .iter()
            .map(|&p| GameScore { date, points: p })
            .collect();
        TeamReport {
            team: dir.resolve(name).unwrap().clone(),
            form: RecentForm {
                average_points: points.iter().sum::<f64>() / points.len().max(1) as f64,
                games,
            },
            top_players: Vec::new(),
            standing: win_pct.map(|win_pct| Standing {
                win_pct,
                wins: None,
                losses: None,
            }),
        }
    }

    #[test]
    fn test_points_chart_needs_both_teams() {
        let home = team_report("Boston Celtics", &[110.0, 120.0], None);
        let away = team_report("Toronto Raptors", &[], None);
        assert!(PointsChart::build(&home, &away).is_none());

        let away = team_report("Toronto Raptors", &[99.0], None);
        let chart = PointsChart::build(&home, &away).unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].team, "Boston Celtics");
        assert_eq!(chart.series[1].games.len(), 1);
        assert_eq!(
            chart.title,
            "Boston Celtics vs Toronto Raptors Points Per Game (Last 10 Games)"
        );
    }

    #[test]
    fn test_win_pct_chart_shares() {
        let home = team_report("Boston Celtics", &[], Some(0.75));
        let away = team_report("Toronto Raptors", &[], Some(0.25));
        let chart = WinPctChart::build(&home, &away).unwrap();
        assert_eq!(chart.slices[0].share, 0.75);
        assert_eq!(chart.slices[1].share, 0.25);
    }

    #[test]
    fn test_win_pct_chart_skipped_without_standings() {
        let home = team_report("Boston Celtics", &[], Some(0.6));
        let away = team_report("Toronto Raptors", &[], None);
        assert!(WinPctChart::build(&home, &away).is_none());

        let away = team_report("Toronto Raptors", &[], Some(0.0));
        let home = team_report("Boston Celtics", &[], Some(0.0));
        assert!(WinPctChart::build(&home, &away).is_none());
    }

    #[test]
    fn test_issue_message() {
        let issue = FetchIssue {
            team: "Boston Celtics".to_string(),
            category: FetchCategory::GameLog,
            message: "timed out".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "Error fetching game logs for Boston Celtics: timed out"
        );
    }
}
