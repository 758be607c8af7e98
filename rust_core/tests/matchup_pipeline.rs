//! Matchup pipeline integration tests
//!
//! Drives MatchupAnalyzer end to end over the in-memory stats source.

use chrono::NaiveDate;
use courtside_core::stats::memory::Query;
use courtside_core::stats::{GameLogRow, PlayerTotalsRow, StandingRow, StaticStatsSource};
use courtside_core::{FetchCategory, MatchupAnalyzer, Season, TeamDirectory, Verdict};

const CELTICS: u32 = 1610612738;
const RAPTORS: u32 = 1610612761;

fn game_log(points: &[f64]) -> Vec<GameLogRow> {
    let latest = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| GameLogRow {
            game_date: latest - chrono::Duration::days(i as i64),
            points: p,
        })
        .collect()
}

fn player(name: &str, gp: u32, pts: f64, reb: f64, ast: f64) -> PlayerTotalsRow {
    PlayerTotalsRow {
        player_name: name.to_string(),
        games_played: gp,
        points: pts,
        rebounds: reb,
        assists: ast,
    }
}

fn standing(team_id: u32, name: &str, w: u32, l: u32) -> StandingRow {
    StandingRow {
        team_id,
        team_name: name.to_string(),
        wins: Some(w),
        losses: Some(l),
        win_pct: w as f64 / (w + l) as f64,
    }
}

fn full_source() -> StaticStatsSource {
    StaticStatsSource::new()
        .with_game_log(CELTICS, game_log(&[120.0, 110.0, 115.0, 105.0, 125.0]))
        .with_game_log(RAPTORS, game_log(&[100.0, 98.0, 104.0, 96.0, 102.0]))
        .with_players(
            CELTICS,
            vec![
                player("Jaylen Brown", 70, 1610.0, 385.0, 252.0),
                player("Jayson Tatum", 74, 1987.0, 603.0, 364.0),
                player("Injured Star", 0, 0.0, 0.0, 0.0),
                player("Derrick White", 73, 1110.0, 310.0, 380.0),
                player("Bench Guy", 60, 300.0, 120.0, 60.0),
            ],
        )
        .with_players(
            RAPTORS,
            vec![
                player("Scottie Barnes", 60, 1192.0, 492.0, 366.0),
                player("RJ Barrett", 58, 1254.0, 370.0, 240.0),
            ],
        )
        .with_standings(vec![
            standing(CELTICS, "Boston Celtics", 61, 21),
            standing(RAPTORS, "Toronto Raptors", 30, 52),
        ])
}

fn analyzer(source: StaticStatsSource) -> MatchupAnalyzer<StaticStatsSource> {
    MatchupAnalyzer::new(source, TeamDirectory::nba()).with_season(Some(Season::new(2024)))
}

#[tokio::test]
async fn test_full_report() {
    let analyzer = analyzer(full_source());
    let report = analyzer
        .analyze("boston celtics", "Toronto Raptors")
        .await
        .unwrap();

    assert_eq!(report.season.label(), "2024-25");
    assert!(report.issues.is_empty());
    assert_eq!(analyzer.source().call_count(), 6);

    // Recent form
    assert!((report.home.form.average_points - 115.0).abs() < 1e-9);
    assert!((report.away.form.average_points - 100.0).abs() < 1e-9);

    // Top scorers, inactive player dropped
    let names: Vec<&str> = report
        .home
        .top_players
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Jayson Tatum", "Jaylen Brown", "Derrick White"]);
    assert_eq!(report.away.top_players.len(), 2);
    assert_eq!(report.away.top_players[0].name, "RJ Barrett");

    // Standings and charts
    assert_eq!(report.home.standing.as_ref().unwrap().wins, Some(61));
    assert!(report.points_chart.is_some());
    let donut = report.win_pct_chart.as_ref().unwrap();
    let share_sum: f64 = donut.slices.iter().map(|s| s.share).sum();
    assert!((share_sum - 1.0).abs() < 1e-9);

    // Prediction
    assert_eq!(report.prediction.home_score, 2.5);
    assert_eq!(report.prediction.away_score, 0.0);
    assert_eq!(report.prediction.verdict, Verdict::Home);
    assert_eq!(report.predicted_winner(), Some("Boston Celtics"));
}

#[tokio::test]
async fn test_unresolved_name_makes_no_calls() {
    let analyzer = analyzer(full_source());
    let err = analyzer
        .analyze("Boston Celticz", "Toronto Raptors")
        .await
        .unwrap_err();

    assert!(err.home.is_some());
    assert!(err.away.is_none());
    assert_eq!(analyzer.source().call_count(), 0);
}

#[tokio::test]
async fn test_failed_game_log_degrades() {
    let source = full_source().failing_game_log_for(CELTICS);
    let report = analyzer(source)
        .analyze("Boston Celtics", "Toronto Raptors")
        .await
        .unwrap();

    assert!(report.home.form.games.is_empty());
    assert_eq!(report.home.form.average_points, 0.0);
    assert!(report.points_chart.is_none());

    // Other sections still produced
    assert_eq!(report.home.top_players.len(), 3);
    assert!(report.home.standing.is_some());
    assert!(report.win_pct_chart.is_some());

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].category, FetchCategory::GameLog);
    assert_eq!(report.issues[0].team, "Boston Celtics");

    // Away leads scoring, home leads win pct: split goes home
    assert_eq!(report.prediction.home_score, 1.5);
    assert_eq!(report.prediction.away_score, 1.0);
    assert_eq!(report.prediction.verdict, Verdict::Home);
}

#[tokio::test]
async fn test_everything_failing_still_predicts() {
    let source = full_source()
        .failing(Query::GameLog)
        .failing(Query::PlayerTotals)
        .failing(Query::Standings);
    let report = analyzer(source)
        .analyze("Boston Celtics", "Toronto Raptors")
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 6);
    assert!(report.home.top_players.is_empty());
    assert!(report.away.standing.is_none());
    assert!(report.points_chart.is_none());
    assert!(report.win_pct_chart.is_none());

    assert_eq!(report.prediction.home_score, 0.5);
    assert_eq!(report.prediction.away_score, 0.0);
    assert_eq!(report.prediction.verdict, Verdict::Home);
}

#[tokio::test]
async fn test_team_missing_from_standings_is_reported() {
    let source = full_source().with_standings(vec![standing(CELTICS, "Boston Celtics", 61, 21)]);
    let report = analyzer(source)
        .analyze("Boston Celtics", "Toronto Raptors")
        .await
        .unwrap();

    assert!(report.away.standing.is_none());
    assert!(report.win_pct_chart.is_none());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].category, FetchCategory::Standing);
    assert_eq!(report.issues[0].team, "Toronto Raptors");
}
