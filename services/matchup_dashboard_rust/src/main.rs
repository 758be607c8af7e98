//! NBA matchup dashboard CLI
//!
//! Fetches recent scoring, top players and standings for a home and an away
//! team, then prints the comparison and a predicted winner.

use anyhow::{Context, Result};
use clap::Parser;
use courtside_core::{MatchupAnalyzer, NbaStatsClient, Season, TeamDirectory};
use dotenv::dotenv;
use matchup_dashboard_rust::{DashboardConfig, OutputFormat};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matchup_dashboard")]
#[command(about = "NBA game prediction dashboard", long_about = None)]
struct Cli {
    /// Home team name (e.g. "Boston Celtics")
    #[arg(required_unless_present = "list_teams")]
    home: Option<String>,

    /// Away team name (e.g. "Toronto Raptors")
    #[arg(required_unless_present = "list_teams")]
    away: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Season label (YYYY-YY), defaults to the current season
    #[arg(long)]
    season: Option<Season>,

    /// Print the known team names and exit
    #[arg(long)]
    list_teams: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();

    // Logs go to stderr so stdout carries only the dashboard
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let directory = TeamDirectory::nba();

    if cli.list_teams {
        for team in directory.teams() {
            println!("{} ({})", team.full_name, team.abbreviation);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = DashboardConfig::from_env().context("Invalid dashboard configuration")?;
    config.log_config();

    let client =
        NbaStatsClient::new(config.stats_config()).context("Failed to build stats client")?;
    let analyzer = MatchupAnalyzer::new(client, directory).with_season(cli.season.or(config.season));

    let home = cli.home.unwrap_or_default();
    let away = cli.away.unwrap_or_default();
    info!("Starting matchup dashboard: {} vs {}", home, away);

    match analyzer.analyze(&home, &away).await {
        Ok(report) => {
            println!("{}", cli.format.renderer().render(&report));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Team resolution failed: {:?}", e);
            eprintln!("{}", e);
            for miss in e.unresolved() {
                eprintln!("  {}", miss);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
