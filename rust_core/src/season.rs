//! NBA season labels.
//!
//! A season spans two calendar years and is labelled `"YYYY-YY"`, e.g. `"2024-25"`.
//! Play starts in October, so October through December belong to the season that
//! starts that year and January through September to the one that started the
//! year before.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// First month (1-based) of a new season.
pub const SEASON_START_MONTH: u32 = 10;

/// A basketball season identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Season {
    start_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonParseError {
    #[error("season label must look like YYYY-YY, got {0:?}")]
    Format(String),
    #[error("season label {label:?} should end in {expected:02}")]
    Mismatch { label: String, expected: i32 },
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Season covering the given calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= SEASON_START_MONTH {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// Season covering today's date on the local clock.
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    /// Label in the form the stats API expects (`"2024-25"`).
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.start_year, self.end_year().rem_euclid(100))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Season {
    type Err = SeasonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (start, end) = trimmed
            .split_once('-')
            .ok_or_else(|| SeasonParseError::Format(trimmed.to_string()))?;

        if start.len() != 4 || end.len() != 2 {
            return Err(SeasonParseError::Format(trimmed.to_string()));
        }

        let start_year: i32 = start
            .parse()
            .map_err(|_| SeasonParseError::Format(trimmed.to_string()))?;
        let end_suffix: i32 = end
            .parse()
            .map_err(|_| SeasonParseError::Format(trimmed.to_string()))?;

        let expected = (start_year + 1).rem_euclid(100);
        if end_suffix != expected {
            return Err(SeasonParseError::Mismatch {
                label: trimmed.to_string(),
                expected,
            });
        }

        Ok(Self::new(start_year))
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.label()
    }
}

impl TryFrom<String> for Season {
    type Error = SeasonParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
