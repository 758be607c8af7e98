//! Report renderers.
//!
//! A renderer turns a finished MatchupReport into the text written to stdout.
//! The core never formats anything itself, so new outputs only need a new
//! Renderer.

use chrono::NaiveDate;
use clap::ValueEnum;
use courtside_core::report::{PointsChart, WinPctChart};
use courtside_core::roster::PlayerLine;
use courtside_core::standings::Standing;
use courtside_core::{MatchupReport, TeamReport, Verdict};
use std::collections::BTreeMap;

const TITLE: &str = "NBA Game Prediction Dashboard";
/// Width of a full donut-share bar
const BAR_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

pub trait Renderer {
    fn render(&self, report: &MatchupReport) -> String;
}

/// Pretty-printed JSON of the whole report.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &MatchupReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {}\"}}", e))
    }
}

/// Plain-text terminal dashboard.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &MatchupReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", TITLE));
        out.push_str(&format!("Data for the {} season.\n", report.season));

        section(&mut out, "Team Stats");
        match &report.points_chart {
            Some(chart) => out.push_str(&points_table(chart)),
            None => out.push_str("Not enough recent games to compare.\n"),
        }
        out.push('\n');
        for team in [&report.home, &report.away] {
            out.push_str(&format!(
                "{} Average Points Per Game: {:.2}\n",
                team.name(),
                team.form.average_points
            ));
        }

        section(&mut out, "Player Stats");
        for team in [&report.home, &report.away] {
            out.push_str(&format!("{} Top Players\n", team.name()));
            out.push_str(&players_table(&team.top_players));
            out.push('\n');
        }

        section(&mut out, "Win Percentage");
        for team in [&report.home, &report.away] {
            out.push_str(&standing_line(team));
        }
        if let Some(chart) = &report.win_pct_chart {
            out.push('\n');
            out.push_str(&donut(chart));
        }

        section(&mut out, "Prediction");
        match report.prediction.verdict {
            Verdict::Home | Verdict::Away => {
                let winner = report.predicted_winner().unwrap_or("?");
                out.push_str(&format!("Prediction: {winner} wins!\n"));
            }
            Verdict::Tie => out.push_str("Prediction: It's a tie!\n"),
        }
        out.push_str(&format!(
            "score {:.1} vs {:.1}\n",
            report.prediction.home_score, report.prediction.away_score
        ));

        if report.is_degraded() {
            section(&mut out, "Errors");
            for issue in &report.issues {
                out.push_str(&format!("{issue}\n"));
            }
        }

        out
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n== {title} ==\n"));
}

/// Date-aligned table of both series; dates run oldest to newest like a chart axis.
fn points_table(chart: &PointsChart) -> String {
    let mut rows: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
    for (idx, series) in chart.series.iter().enumerate() {
        for game in &series.games {
            let cells = rows
                .entry(game.date)
                .or_insert_with(|| vec![None; chart.series.len()]);
            cells[idx] = Some(game.points);
        }
    }

    let widths: Vec<usize> = chart.series.iter().map(|s| s.team.len().max(6)).collect();

    let mut out = format!("{}\n", chart.title);
    out.push_str(&format!("{:<10}", "Game Date"));
    for (series, width) in chart.series.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", series.team, width = width));
    }
    out.push('\n');

    for (date, cells) in rows {
        out.push_str(&date.format("%Y-%m-%d").to_string());
        for (cell, width) in cells.iter().zip(&widths) {
            let value = cell.map(|p| format!("{p:.0}")).unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("  {:>width$}", value, width = width));
        }
        out.push('\n');
    }
    out
}

fn players_table(players: &[PlayerLine]) -> String {
    if players.is_empty() {
        return "(no player data)\n".to_string();
    }

    let name_width = players
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut out = format!(
        "{:<nw$}  {:>6}  {:>6}  {:>6}\n",
        "Player",
        "PPG",
        "RPG",
        "APG",
        nw = name_width
    );
    for p in players {
        out.push_str(&format!(
            "{:<nw$}  {:>6.2}  {:>6.2}  {:>6.2}\n",
            p.name,
            p.ppg,
            p.rpg,
            p.apg,
            nw = name_width
        ));
    }
    out
}

fn standing_line(team: &TeamReport) -> String {
    match &team.standing {
        Some(Standing {
            win_pct,
            wins: Some(w),
            losses: Some(l),
        }) => format!("{}: {:.3} ({}-{})\n", team.name(), win_pct, w, l),
        Some(standing) => format!("{}: {:.3}\n", team.name(), standing.win_pct),
        None => format!("{}: n/a\n", team.name()),
    }
}

fn donut(chart: &WinPctChart) -> String {
    let name_width = chart.slices.iter().map(|s| s.team.len()).max().unwrap_or(0);
    let mut out = format!("{}\n", chart.title);
    for slice in &chart.slices {
        let bar = "#".repeat((slice.share * BAR_WIDTH).round() as usize);
        out.push_str(&format!(
            "{:<nw$}  {:>5.1}%  {}\n",
            slice.team,
            slice.share * 100.0,
            bar,
            nw = name_width
        ));
    }
    out
}
