//! Team reference data and name resolution.
//!
//! This module provides:
//! - Static reference list of NBA franchises with their stats.nba.com identifiers
//! - Exact, case-insensitive lookup from a display name to a team
//! - A closest-name hint for error messages (never used to resolve)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum Jaro-Winkler similarity before a name is offered as a hint.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Static record for one franchise.
#[derive(Debug, Clone)]
pub struct TeamRecord {
    /// stats.nba.com team identifier
    pub id: u32,
    /// Full display name (e.g., "Boston Celtics")
    pub full_name: &'static str,
    pub abbreviation: &'static str,
    pub nickname: &'static str,
    pub city: &'static str,
}

/// A resolved team, owned so it can travel through a report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    pub full_name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
}

impl From<&TeamRecord> for TeamRef {
    fn from(record: &TeamRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name.to_string(),
            abbreviation: record.abbreviation.to_string(),
            nickname: record.nickname.to_string(),
            city: record.city.to_string(),
        }
    }
}

/// Static reference list for all NBA franchises.
pub static NBA_TEAMS: &[TeamRecord] = &[
    // Eastern Conference
    TeamRecord { id: 1610612737, full_name: "Atlanta Hawks", abbreviation: "ATL", nickname: "Hawks", city: "Atlanta" },
    TeamRecord { id: 1610612738, full_name: "Boston Celtics", abbreviation: "BOS", nickname: "Celtics", city: "Boston" },
    TeamRecord { id: 1610612739, full_name: "Cleveland Cavaliers", abbreviation: "CLE", nickname: "Cavaliers", city: "Cleveland" },
    TeamRecord { id: 1610612741, full_name: "Chicago Bulls", abbreviation: "CHI", nickname: "Bulls", city: "Chicago" },
    TeamRecord { id: 1610612748, full_name: "Miami Heat", abbreviation: "MIA", nickname: "Heat", city: "Miami" },
    TeamRecord { id: 1610612749, full_name: "Milwaukee Bucks", abbreviation: "MIL", nickname: "Bucks", city: "Milwaukee" },
    TeamRecord { id: 1610612751, full_name: "Brooklyn Nets", abbreviation: "BKN", nickname: "Nets", city: "Brooklyn" },
    TeamRecord { id: 1610612752, full_name: "New York Knicks", abbreviation: "NYK", nickname: "Knicks", city: "New York" },
    TeamRecord { id: 1610612753, full_name: "Orlando Magic", abbreviation: "ORL", nickname: "Magic", city: "Orlando" },
    TeamRecord { id: 1610612754, full_name: "Indiana Pacers", abbreviation: "IND", nickname: "Pacers", city: "Indiana" },
    TeamRecord { id: 1610612755, full_name: "Philadelphia 76ers", abbreviation: "PHI", nickname: "76ers", city: "Philadelphia" },
    TeamRecord { id: 1610612761, full_name: "Toronto Raptors", abbreviation: "TOR", nickname: "Raptors", city: "Toronto" },
    TeamRecord { id: 1610612764, full_name: "Washington Wizards", abbreviation: "WAS", nickname: "Wizards", city: "Washington" },
    TeamRecord { id: 1610612765, full_name: "Detroit Pistons", abbreviation: "DET", nickname: "Pistons", city: "Detroit" },
    TeamRecord { id: 1610612766, full_name: "Charlotte Hornets", abbreviation: "CHA", nickname: "Hornets", city: "Charlotte" },
    // Western Conference
    TeamRecord { id: 1610612740, full_name: "New Orleans Pelicans", abbreviation: "NOP", nickname: "Pelicans", city: "New Orleans" },
    TeamRecord { id: 1610612742, full_name: "Dallas Mavericks", abbreviation: "DAL", nickname: "Mavericks", city: "Dallas" },
    TeamRecord { id: 1610612743, full_name: "Denver Nuggets", abbreviation: "DEN", nickname: "Nuggets", city: "Denver" },
    TeamRecord { id: 1610612744, full_name: "Golden State Warriors", abbreviation: "GSW", nickname: "Warriors", city: "Golden State" },
    TeamRecord { id: 1610612745, full_name: "Houston Rockets", abbreviation: "HOU", nickname: "Rockets", city: "Houston" },
    TeamRecord { id: 1610612746, full_name: "LA Clippers", abbreviation: "LAC", nickname: "Clippers", city: "Los Angeles" },
    TeamRecord { id: 1610612747, full_name: "Los Angeles Lakers", abbreviation: "LAL", nickname: "Lakers", city: "Los Angeles" },
    TeamRecord { id: 1610612750, full_name: "Minnesota Timberwolves", abbreviation: "MIN", nickname: "Timberwolves", city: "Minnesota" },
    TeamRecord { id: 1610612756, full_name: "Phoenix Suns", abbreviation: "PHX", nickname: "Suns", city: "Phoenix" },
    TeamRecord { id: 1610612757, full_name: "Portland Trail Blazers", abbreviation: "POR", nickname: "Trail Blazers", city: "Portland" },
    TeamRecord { id: 1610612758, full_name: "Sacramento Kings", abbreviation: "SAC", nickname: "Kings", city: "Sacramento" },
    TeamRecord { id: 1610612759, full_name: "San Antonio Spurs", abbreviation: "SAS", nickname: "Spurs", city: "San Antonio" },
    TeamRecord { id: 1610612760, full_name: "Oklahoma City Thunder", abbreviation: "OKC", nickname: "Thunder", city: "Oklahoma City" },
    TeamRecord { id: 1610612762, full_name: "Utah Jazz", abbreviation: "UTA", nickname: "Jazz", city: "Utah" },
    TeamRecord { id: 1610612763, full_name: "Memphis Grizzlies", abbreviation: "MEM", nickname: "Grizzlies", city: "Memphis" },
];

/// Name-to-team lookup over a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: Vec<TeamRef>,
    /// lowercased full name -> index into `teams`
    by_name: HashMap<String, usize>,
}

impl TeamDirectory {
    /// Build a directory from arbitrary records. Later duplicates of a name win.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TeamRef>,
    {
        let teams: Vec<TeamRef> = records.into_iter().collect();
        let by_name = teams
            .iter()
            .enumerate()
            .map(|(idx, team)| (team.full_name.to_lowercase(), idx))
            .collect();
        Self { teams, by_name }
    }

    /// Directory of the 30 NBA franchises.
    pub fn nba() -> Self {
        Self::new(NBA_TEAMS.iter().map(TeamRef::from))
    }

    /// Exact case-insensitive match on the full name.
    pub fn resolve(&self, name: &str) -> Option<&TeamRef> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.teams[idx])
    }

    /// Closest known full name, for "did you mean" hints only.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.teams
            .iter()
            .map(|team| {
                let score = strsim::jaro_winkler(&needle, &team.full_name.to_lowercase());
                (team.full_name.as_str(), score)
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }

    pub fn teams(&self) -> &[TeamRef] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
