//! Configuration for matchup_dashboard_rust

use anyhow::{anyhow, Result};
use courtside_core::clients::nba_stats::{DEFAULT_BASE_URL, DEFAULT_SEASON_TYPE};
use courtside_core::{NbaStatsConfig, Season};
use std::env;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    // Upstream
    pub stats_base_url: String,
    pub stats_timeout_secs: u64,
    /// Pause before each upstream call
    pub stats_pause_ms: u64,
    pub season_type: String,

    /// Season to report on instead of the current one
    pub season: Option<Season>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup; `from_env` reads the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let season_type = lookup("NBA_SEASON_TYPE")
            .unwrap_or_else(|| DEFAULT_SEASON_TYPE.to_string());
        if !matches!(
            season_type.as_str(),
            "Regular Season" | "Playoffs" | "Pre Season" | "PlayIn"
        ) {
            return Err(anyhow!(
                "NBA_SEASON_TYPE must be one of Regular Season, Playoffs, Pre Season, PlayIn"
            ));
        }

        let stats_timeout_secs = parse_u64(&lookup, "NBA_STATS_TIMEOUT_SECS", 30)?;
        if stats_timeout_secs == 0 {
            return Err(anyhow!("NBA_STATS_TIMEOUT_SECS must be > 0"));
        }

        Ok(Self {
            stats_base_url: lookup("NBA_STATS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            stats_timeout_secs,
            stats_pause_ms: parse_u64(&lookup, "NBA_STATS_PAUSE_MS", 1000)?,
            season_type,
            season: parse_season(&lookup, "NBA_SEASON")?,
        })
    }

    pub fn stats_config(&self) -> NbaStatsConfig {
        NbaStatsConfig {
            base_url: self.stats_base_url.clone(),
            timeout: Duration::from_secs(self.stats_timeout_secs),
            call_pause: Duration::from_millis(self.stats_pause_ms),
            season_type: self.season_type.clone(),
        }
    }

    /// Log current configuration (useful at startup)
    pub fn log_config(&self) {
        info!("DashboardConfig loaded:");
        info!("  stats_base_url: {}", self.stats_base_url);
        info!("  stats_timeout_secs: {}s", self.stats_timeout_secs);
        info!("  stats_pause_ms: {}ms", self.stats_pause_ms);
        info!("  season_type: {}", self.season_type);
        match &self.season {
            Some(season) => info!("  season: {} (pinned)", season),
            None => info!("  season: current"),
        }
    }
}

/// Parse variable as u64 with default fallback
fn parse_u64<F>(lookup: &F, var_name: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        Some(val) => val
            .parse()
            .map_err(|_| anyhow!("{} must be a valid u64", var_name)),
        None => Ok(default),
    }
}

/// Parse optional variable as a season label
fn parse_season<F>(lookup: &F, var_name: &str) -> Result<Option<Season>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        Some(val) if val.trim().is_empty() => Ok(None),
        Some(val) => val
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("{} is invalid: {}", var_name, e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DashboardConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config.stats_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.stats_timeout_secs, 30);
        assert_eq!(config.stats_pause_ms, 1000);
        assert_eq!(config.season_type, "Regular Season");
        assert_eq!(config.season, None);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(vars(&[
            ("NBA_STATS_PAUSE_MS", "0"),
            ("NBA_SEASON_TYPE", "Playoffs"),
            ("NBA_SEASON", "2023-24"),
        ]))
        .unwrap();
        assert_eq!(config.stats_pause_ms, 0);
        assert_eq!(config.season_type, "Playoffs");
        assert_eq!(config.season, Some(Season::new(2023)));
    }

    #[test]
    fn test_rejects_unknown_season_type() {
        let err = DashboardConfig::from_lookup(vars(&[("NBA_SEASON_TYPE", "Summer League")]))
            .unwrap_err();
        assert!(err.to_string().contains("NBA_SEASON_TYPE"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = DashboardConfig::from_lookup(vars(&[("NBA_STATS_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be > 0"));
    }

    #[test]
    fn test_rejects_non_numeric_pause() {
        assert!(DashboardConfig::from_lookup(vars(&[("NBA_STATS_PAUSE_MS", "fast")])).is_err());
    }

    #[test]
    fn test_rejects_malformed_season() {
        let err = DashboardConfig::from_lookup(vars(&[("NBA_SEASON", "2024-26")])).unwrap_err();
        assert!(err.to_string().contains("NBA_SEASON is invalid"));
    }

    #[test]
    fn test_blank_season_means_current() {
        let config = DashboardConfig::from_lookup(vars(&[("NBA_SEASON", "  ")])).unwrap();
        assert_eq!(config.season, None);
    }

    #[test]
    fn test_stats_config_conversion() {
        let config = DashboardConfig {
            stats_base_url: "http://localhost:8080/stats".to_string(),
            stats_timeout_secs: 5,
            stats_pause_ms: 250,
            season_type: "Playoffs".to_string(),
            season: Some(Season::new(2023)),
        };

        let stats = config.stats_config();
        assert_eq!(stats.base_url, "http://localhost:8080/stats");
        assert_eq!(stats.timeout, Duration::from_secs(5));
        assert_eq!(stats.call_pause, Duration::from_millis(250));
        assert_eq!(stats.season_type, "Playoffs");
    }
}
