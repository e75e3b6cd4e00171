//! Coverage summary model and metric extraction.
//!
//! The input is the `coverage-summary.json` written by istanbul-style
//! coverage tooling: a `total` object mapping metric names to records
//! with a `pct` percentage. Percentages that are absent or non-numeric
//! (some reporters emit `"Unknown"`) count as zero; a missing metric
//! record is an error.

use crate::errors::{BadgeError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

/// Metric keys always rendered as individual badges.
pub const REPORT_KEYS: [&str; 4] = ["lines", "statements", "functions", "branches"];

#[derive(Debug, Deserialize)]
/// Parsed coverage summary. Fields other than `total` are ignored.
pub struct CoverageReport {
    pub total: Totals,
}

#[derive(Debug, Default, Deserialize)]
/// Per-metric records under `total`. Extra metrics are ignored.
pub struct Totals {
    pub lines: Option<MetricTotal>,
    pub statements: Option<MetricTotal>,
    pub functions: Option<MetricTotal>,
    pub branches: Option<MetricTotal>,
}

#[derive(Debug, Default, Deserialize)]
/// One metric record. Only `pct` is consumed.
pub struct MetricTotal {
    #[serde(default, deserialize_with = "lenient_pct")]
    pub pct: Option<f64>,
}

/// Accept any JSON value for `pct`, keeping only numbers.
fn lenient_pct<'de, D>(de: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Json::deserialize(de)?;
    Ok(v.as_f64())
}

impl MetricTotal {
    /// Defaulting policy: absent or non-numeric percentage is zero.
    pub fn pct_or_zero(&self) -> f64 {
        self.pct.unwrap_or(0.0)
    }
}

impl Totals {
    fn get(&self, key: &str) -> Option<&MetricTotal> {
        match key {
            "lines" => self.lines.as_ref(),
            "statements" => self.statements.as_ref(),
            "functions" => self.functions.as_ref(),
            "branches" => self.branches.as_ref(),
            _ => None,
        }
    }
}

impl CoverageReport {
    /// Read and parse a coverage summary file.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).map_err(|e| BadgeError::ReportRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&s).map_err(|e| BadgeError::ReportParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Percentage for a single metric key.
    pub fn metric_pct(&self, key: &str) -> Result<f64> {
        self.total
            .get(key)
            .map(MetricTotal::pct_or_zero)
            .ok_or_else(|| BadgeError::MalformedReport(key.to_string()))
    }

    /// Unrounded arithmetic mean over a key specification.
    ///
    /// `"all"` resolves to the four fixed keys; anything else is split
    /// on commas, trimmed, with empty segments dropped. Each resolved
    /// key follows the same rule as `metric_pct`.
    pub fn average_pct(&self, keys_spec: &str) -> Result<f64> {
        let keys: Vec<&str> = if keys_spec == "all" {
            REPORT_KEYS.to_vec()
        } else {
            keys_spec
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .collect()
        };
        if keys.is_empty() {
            return Err(BadgeError::NoKeys);
        }
        let mut sum = 0.0;
        for key in &keys {
            sum += self.metric_pct(key)?;
        }
        Ok(sum / keys.len() as f64)
    }
}
