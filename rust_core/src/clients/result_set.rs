//! stats.nba.com tabular response format.
//!
//! Every endpoint answers with
//! `{"resultSets": [{"name": ..., "headers": [...], "rowSet": [[...], ...]}]}`.
//! Columns are looked up by header name so the column order the API happens to
//! send does not matter.

use crate::stats::StatsError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub rows: Vec<Vec<Value>>,
}

impl StatsResponse {
    /// Find a result set by name, falling back to its usual position.
    pub fn result_set(&self, name: &str, fallback_index: usize) -> Result<&ResultSet, StatsError> {
        self.result_sets
            .iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name))
            .or_else(|| self.result_sets.get(fallback_index))
            .ok_or_else(|| StatsError::MissingResultSet(name.to_string()))
    }
}

impl ResultSet {
    /// Index of a required column.
    pub fn column(&self, column: &str) -> Result<usize, StatsError> {
        self.optional_column(column)
            .ok_or_else(|| StatsError::MissingColumn {
                result_set: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn optional_column(&self, column: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
    }

    fn invalid(&self, column: &str, value: &Value) -> StatsError {
        StatsError::InvalidValue {
            result_set: self.name.clone(),
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Numeric cell. Numeric strings are accepted as well.
    pub fn f64_at(&self, row: &[Value], idx: usize, column: &str) -> Result<f64, StatsError> {
        let value = row.get(idx).unwrap_or(&Value::Null);
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| self.invalid(column, value)),
            Value::String(s) => s.trim().parse().map_err(|_| self.invalid(column, value)),
            _ => Err(self.invalid(column, value)),
        }
    }

    /// Non-negative integer cell.
    pub fn u32_at(&self, row: &[Value], idx: usize, column: &str) -> Result<u32, StatsError> {
        let value = row.get(idx).unwrap_or(&Value::Null);
        let parsed = match value {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| self.invalid(column, value))
    }

    pub fn str_at<'a>(&self, row: &'a [Value], idx: usize, column: &str) -> Result<&'a str, StatsError> {
        match row.get(idx) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(self.invalid(column, other)),
            None => Err(self.invalid(column, &Value::Null)),
        }
    }
}
