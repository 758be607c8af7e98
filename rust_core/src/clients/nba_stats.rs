//! stats.nba.com API client
//!
//! Implements StatsSource over three public endpoints:
//! - `teamgamelog` for a team's game-by-game scoring
//! - `teamplayerdashboard` for per-player season totals
//! - `leaguedashteamstats` for the league standings table
//!
//! The API rejects requests that do not look like they come from nba.com, so
//! browser-style headers are sent with every call.

use super::result_set::{ResultSet, StatsResponse};
use crate::form::RECENT_GAMES;
use crate::pacing::{CallPacer, DEFAULT_CALL_PAUSE};
use crate::season::Season;
use crate::stats::{GameLogRow, PlayerTotalsRow, StandingRow, StatsError, StatsSource};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";
pub const DEFAULT_SEASON_TYPE: &str = "Regular Season";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Connection settings for the stats API.
#[derive(Debug, Clone)]
pub struct NbaStatsConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Pause applied before every call
    pub call_pause: Duration,
    /// "Regular Season", "Playoffs", "Pre Season"
    pub season_type: String,
}

impl Default for NbaStatsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            call_pause: DEFAULT_CALL_PAUSE,
            season_type: DEFAULT_SEASON_TYPE.to_string(),
        }
    }
}

pub struct NbaStatsClient {
    client: Client,
    base_url: String,
    season_type: String,
    pacer: CallPacer,
}

impl std::fmt::Debug for NbaStatsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NbaStatsClient")
            .field("base_url", &self.base_url)
            .field("season_type", &self.season_type)
            .field("call_pause", &self.pacer.pause())
            .finish()
    }
}

impl NbaStatsClient {
    pub fn new(config: NbaStatsConfig) -> Result<Self, StatsError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            season_type: config.season_type,
            pacer: CallPacer::new(config.call_pause),
        })
    }

    /// Paced GET of one endpoint, decoded into the result-set envelope.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<StatsResponse, StatsError> {
        self.pacer.wait().await;

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Fetching {} with {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(StatsError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn game_log_params(&self, team_id: u32, season: Season) -> Vec<(&'static str, String)> {
        vec![
            ("DateFrom", String::new()),
            ("DateTo", String::new()),
            ("LeagueID", "00".to_string()),
            ("Season", season.label()),
            ("SeasonType", self.season_type.clone()),
            ("TeamID", team_id.to_string()),
        ]
    }

    /// Filters shared by the two dashboard endpoints; all "no filter" values.
    fn dashboard_params(&self, season: Season) -> Vec<(&'static str, String)> {
        vec![
            ("DateFrom", String::new()),
            ("DateTo", String::new()),
            ("GameSegment", String::new()),
            ("LastNGames", "0".to_string()),
            ("LeagueID", "00".to_string()),
            ("Location", String::new()),
            ("MeasureType", "Base".to_string()),
            ("Month", "0".to_string()),
            ("OpponentTeamID", "0".to_string()),
            ("Outcome", String::new()),
            ("PORound", "0".to_string()),
            ("PaceAdjust", "N".to_string()),
            ("PerMode", "Totals".to_string()),
            ("Period", "0".to_string()),
            ("PlusMinus", "N".to_string()),
            ("Rank", "N".to_string()),
            ("Season", season.label()),
            ("SeasonSegment", String::new()),
            ("SeasonType", self.season_type.clone()),
            ("ShotClockRange", String::new()),
            ("VsConference", String::new()),
            ("VsDivision", String::new()),
        ]
    }
}

#[async_trait]
impl StatsSource for NbaStatsClient {
    async fn team_game_log(
        &self,
        team_id: u32,
        season: Season,
    ) -> Result<Vec<GameLogRow>, StatsError> {
        let params = self.game_log_params(team_id, season);
        let response = self.fetch("teamgamelog", &params).await?;
        parse_game_log(&response)
    }

    async fn team_player_totals(
        &self,
        team_id: u32,
        season: Season,
    ) -> Result<Vec<PlayerTotalsRow>, StatsError> {
        let mut params = self.dashboard_params(season);
        params.push(("TeamID", team_id.to_string()));
        let response = self.fetch("teamplayerdashboard", &params).await?;
        parse_player_totals(&response)
    }

    async fn league_standings(&self, season: Season) -> Result<Vec<StandingRow>, StatsError> {
        let mut params = self.dashboard_params(season);
        params.extend([
            ("Conference", String::new()),
            ("Division", String::new()),
            ("GameScope", String::new()),
            ("PlayerExperience", String::new()),
            ("PlayerPosition", String::new()),
            ("StarterBench", String::new()),
            ("TeamID", "0".to_string()),
            ("TwoWay", "0".to_string()),
        ]);
        let response = self.fetch("leaguedashteamstats", &params).await?;
        parse_standings(&response)
    }

    fn source_name(&self) -> &str {
        "stats.nba.com"
    }
}

/// Game dates arrive as "APR 14, 2024"; ISO forms are accepted too.
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%b %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parse the most recent RECENT_GAMES rows of a game log, newest first.
///
/// Points must be numeric on every row of the season log. Dates are only
/// read for the rows that are kept.
pub fn parse_game_log(response: &StatsResponse) -> Result<Vec<GameLogRow>, StatsError> {
    let rs = response.result_set("TeamGameLog", 0)?;
    let date_col = rs.column("GAME_DATE")?;
    let pts_col = rs.column("PTS")?;

    let points = rs
        .rows
        .iter()
        .map(|row| rs.f64_at(row, pts_col, "PTS"))
        .collect::<Result<Vec<f64>, _>>()?;

    rs.rows
        .iter()
        .zip(points)
        .take(RECENT_GAMES)
        .map(|(row, points)| {
            let raw_date = rs.str_at(row, date_col, "GAME_DATE")?;
            let game_date = parse_game_date(raw_date).ok_or_else(|| StatsError::InvalidValue {
                result_set: rs.name.clone(),
                column: "GAME_DATE".to_string(),
                value: raw_date.to_string(),
            })?;
            Ok(GameLogRow { game_date, points })
        })
        .collect()
}

pub fn parse_player_totals(response: &StatsResponse) -> Result<Vec<PlayerTotalsRow>, StatsError> {
    let rs = response.result_set("PlayersSeasonTotals", 1)?;
    let name_col = rs.column("PLAYER_NAME")?;
    let gp_col = rs.column("GP")?;
    let pts_col = rs.column("PTS")?;
    let reb_col = rs.column("REB")?;
    let ast_col = rs.column("AST")?;

    rs.rows
        .iter()
        .map(|row| {
            Ok(PlayerTotalsRow {
                player_name: rs.str_at(row, name_col, "PLAYER_NAME")?.to_string(),
                games_played: rs.u32_at(row, gp_col, "GP")?,
                points: rs.f64_at(row, pts_col, "PTS")?,
                rebounds: rs.f64_at(row, reb_col, "REB")?,
                assists: rs.f64_at(row, ast_col, "AST")?,
            })
        })
        .collect()
}

pub fn parse_standings(response: &StatsResponse) -> Result<Vec<StandingRow>, StatsError> {
    let rs = response.result_set("LeagueDashTeamStats", 0)?;
    let id_col = rs.column("TEAM_ID")?;
    let pct_col = rs.column("W_PCT")?;
    let name_col = rs.optional_column("TEAM_NAME");
    let w_col = rs.optional_column("W");
    let l_col = rs.optional_column("L");

    rs.rows
        .iter()
        .map(|row| standing_row(rs, row, id_col, pct_col, name_col, w_col, l_col))
        .collect()
}

fn standing_row(
    rs: &ResultSet,
    row: &[serde_json::Value],
    id_col: usize,
    pct_col: usize,
    name_col: Option<usize>,
    w_col: Option<usize>,
    l_col: Option<usize>,
) -> Result<StandingRow, StatsError> {
    Ok(StandingRow {
        team_id: rs.u32_at(row, id_col, "TEAM_ID")?,
        team_name: name_col
            .and_then(|idx| rs.str_at(row, idx, "TEAM_NAME").ok())
            .unwrap_or_default()
            .to_string(),
        wins: w_col.and_then(|idx| record_count(rs, row, idx, "W")),
        losses: l_col.and_then(|idx| record_count(rs, row, idx, "L")),
        win_pct: rs.f64_at(row, pct_col, "W_PCT")?,
    })
}

/// W and L only feed the display; an unreadable cell becomes None.
fn record_count(
    rs: &ResultSet,
    row: &[serde_json::Value],
    idx: usize,
    column: &str,
) -> Option<u32> {
    match rs.u32_at(row, idx, column) {
        Ok(count) => Some(count),
        Err(e) => {
            debug!("Dropping {} value in {}: {}", column, rs.name, e);
            None
        }
    }
}
