//! Courtside Core - NBA matchup statistics and winner prediction.
//!
//! This module provides:
//! - Season label resolution from the calendar date
//! - Team name resolution against the NBA reference list
//! - A StatsSource seam with a paced stats.nba.com client
//! - Recent form, top scorers and standings derived from upstream tables
//! - The home/away heuristic predictor
//! - A matchup pipeline that assembles everything into a MatchupReport

pub mod clients;
pub mod form;
pub mod matchup;
pub mod pacing;
pub mod predict;
pub mod report;
pub mod roster;
pub mod season;
pub mod standings;
pub mod stats;
pub mod teams;

pub use clients::{NbaStatsClient, NbaStatsConfig};
pub use matchup::{MatchupAnalyzer, ResolutionError, UnresolvedTeam};
pub use predict::{Prediction, Verdict};
pub use report::{FetchCategory, FetchIssue, MatchupReport, TeamReport};
pub use season::Season;
pub use stats::{StatsError, StatsSource};
pub use teams::{TeamDirectory, TeamRef};
