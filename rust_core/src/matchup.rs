//! Matchup pipeline.
//!
//! Resolves both team names, runs the six upstream queries concurrently,
//! degrades each failed query to its empty default, and predicts a winner.
//! Only name resolution can fail a request; every fetch problem ends up in
//! `MatchupReport::issues` instead.

use crate::form::RecentForm;
use crate::predict::{predict, SideMetrics};
use crate::report::{FetchCategory, FetchIssue, MatchupReport, PointsChart, TeamReport, WinPctChart};
use crate::roster::{top_scorers, TOP_PLAYERS};
use crate::season::Season;
use crate::standings::{find_standing, win_pct_or_zero};
use crate::stats::{GameLogRow, PlayerTotalsRow, StandingRow, StatsError, StatsSource};
use crate::teams::{TeamDirectory, TeamRef};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// A team name that did not match the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedTeam {
    pub input: String,
    /// Closest known name, for the error message only
    pub suggestion: Option<String>,
}

impl fmt::Display for UnresolvedTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} not found", self.input)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean {:?}?)", suggestion)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("One or both teams not found. Please check the spelling and try again.")]
pub struct ResolutionError {
    pub home: Option<UnresolvedTeam>,
    pub away: Option<UnresolvedTeam>,
}

impl ResolutionError {
    pub fn unresolved(&self) -> impl Iterator<Item = &UnresolvedTeam> {
        self.home.iter().chain(self.away.iter())
    }
}

pub struct MatchupAnalyzer<S> {
    source: S,
    directory: TeamDirectory,
    season: Option<Season>,
}

impl<S: StatsSource> MatchupAnalyzer<S> {
    pub fn new(source: S, directory: TeamDirectory) -> Self {
        Self {
            source,
            directory,
            season: None,
        }
    }

    /// Pin the season instead of deriving it from today's date.
    pub fn with_season(mut self, season: Option<Season>) -> Self {
        self.season = season;
        self
    }

    pub fn season(&self) -> Season {
        self.season.unwrap_or_else(Season::current)
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve both names; either miss rejects the pair.
    pub fn resolve(&self, home: &str, away: &str) -> Result<(TeamRef, TeamRef), ResolutionError> {
        let lookup = |name: &str| {
            self.directory.resolve(name).cloned().ok_or_else(|| UnresolvedTeam {
                input: name.to_string(),
                suggestion: self.directory.suggest(name).map(str::to_string),
            })
        };

        match (lookup(home), lookup(away)) {
            (Ok(h), Ok(a)) => Ok((h, a)),
            (h, a) => Err(ResolutionError {
                home: h.err(),
                away: a.err(),
            }),
        }
    }

    pub async fn analyze(&self, home: &str, away: &str) -> Result<MatchupReport, ResolutionError> {
        let (home, away) = self.resolve(home, away)?;
        let season = self.season();

        info!(
            "Analyzing {} vs {} for the {} season via {}",
            home.full_name,
            away.full_name,
            season,
            self.source.source_name()
        );

        let (home_log, away_log, home_players, away_players, home_table, away_table) = tokio::join!(
            self.source.team_game_log(home.id, season),
            self.source.team_game_log(away.id, season),
            self.source.team_player_totals(home.id, season),
            self.source.team_player_totals(away.id, season),
            self.source.league_standings(season),
            self.source.league_standings(season),
        );

        let mut issues = Vec::new();
        let home_report = assemble(&home, home_log, home_players, home_table, &mut issues);
        let away_report = assemble(&away, away_log, away_players, away_table, &mut issues);

        let prediction = predict(
            SideMetrics {
                average_points: home_report.form.average_points,
                win_pct: win_pct_or_zero(home_report.standing.as_ref()),
            },
            SideMetrics {
                average_points: away_report.form.average_points,
                win_pct: win_pct_or_zero(away_report.standing.as_ref()),
            },
        );

        info!(
            "Prediction {:?} ({:.1} vs {:.1}), {} fetch issue(s)",
            prediction.verdict,
            prediction.home_score,
            prediction.away_score,
            issues.len()
        );

        Ok(MatchupReport {
            season,
            points_chart: PointsChart::build(&home_report, &away_report),
            win_pct_chart: WinPctChart::build(&home_report, &away_report),
            home: home_report,
            away: away_report,
            prediction,
            issues,
        })
    }
}

/// Build one team's section, degrading every failed query to its default.
fn assemble(
    team: &TeamRef,
    game_log: Result<Vec<GameLogRow>, StatsError>,
    players: Result<Vec<PlayerTotalsRow>, StatsError>,
    table: Result<Vec<StandingRow>, StatsError>,
    issues: &mut Vec<FetchIssue>,
) -> TeamReport {
    let form = recover(team, FetchCategory::GameLog, game_log, issues)
        .map(|rows| RecentForm::from_game_log(&rows))
        .unwrap_or_default();

    let top_players = recover(team, FetchCategory::Players, players, issues)
        .map(|rows| top_scorers(&rows, TOP_PLAYERS))
        .unwrap_or_default();

    let standing = recover(team, FetchCategory::Standing, table, issues).and_then(|rows| {
        let found = find_standing(&rows, team.id);
        if found.is_none() {
            warn!("{} missing from standings table", team.full_name);
            issues.push(FetchIssue {
                team: team.full_name.clone(),
                category: FetchCategory::Standing,
                message: "team not present in league standings".to_string(),
            });
        }
        found
    });

    TeamReport {
        team: team.clone(),
        form,
        top_players,
        standing,
    }
}

fn recover<T>(
    team: &TeamRef,
    category: FetchCategory,
    result: Result<T, StatsError>,
    issues: &mut Vec<FetchIssue>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Error fetching {} for {}: {}", category, team.full_name, e);
            issues.push(FetchIssue {
                team: team.full_name.clone(),
                category,
                message: e.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StaticStatsSource;

    fn analyzer() -> MatchupAnalyzer<StaticStatsSource> {
        MatchupAnalyzer::new(StaticStatsSource::new(), TeamDirectory::nba())
            .with_season(Some(Season::new(2024)))
    }

    #[test]
    fn test_resolve_both() {
        let (home, away) = analyzer()
            .resolve("boston celtics", "TORONTO RAPTORS")
            .unwrap();
        assert_eq!(home.abbreviation, "BOS");
        assert_eq!(away.abbreviation, "TOR");
    }

    #[test]
    fn test_resolve_reports_each_miss() {
        let err = analyzer()
            .resolve("Boston Celticz", "Toronto Raptors")
            .unwrap_err();
        assert!(err.away.is_none());
        let home = err.home.unwrap();
        assert_eq!(home.input, "Boston Celticz");
        assert_eq!(home.suggestion.as_deref(), Some("Boston Celtics"));

        let err = analyzer().resolve("Nowhere", "Somewhere").unwrap_err();
        assert_eq!(err.unresolved().count(), 2);
    }

    #[test]
    fn test_unresolved_display() {
        let miss = UnresolvedTeam {
            input: "Boston Celticz".to_string(),
            suggestion: Some("Boston Celtics".to_string()),
        };
        assert_eq!(
            miss.to_string(),
            "\"Boston Celticz\" not found (did you mean \"Boston Celtics\"?)"
        );
    }

    #[test]
    fn test_pinned_season() {
        assert_eq!(analyzer().season().label(), "2024-25");
    }
}
