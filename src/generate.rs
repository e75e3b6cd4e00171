//! Badge generation pipeline: extract, build URL, fetch, save.

use crate::badge::{self, Color};
use crate::config::Effective;
use crate::errors::Result;
use crate::fetch::fetch_badge;
use crate::report::{CoverageReport, REPORT_KEYS};
use crate::save::save_badge;
use std::path::PathBuf;

/// One rendered badge, for output reporting.
pub struct GeneratedBadge {
    /// File key (`lines`, ..., `average`).
    pub key: String,
    pub pct: f64,
    pub color: Color,
    pub url: String,
    /// Written path; `None` when the output directory could not be
    /// created and the badge was skipped.
    pub path: Option<PathBuf>,
}

/// Generate the four fixed-metric badges plus the optional average badge.
///
/// The report is loaded once and is immutable afterwards. Pipelines are
/// independent but run in sequence; the first failure aborts the run.
pub fn run_generate(eff: &Effective) -> Result<Vec<GeneratedBadge>> {
    let report = CoverageReport::load(&eff.input)?;

    let mut badges = Vec::new();
    for key in REPORT_KEYS {
        let pct = report.metric_pct(key)?;
        badges.push(generate_one(eff, pct, Some(key), key)?);
    }

    if let Some(spec) = eff.average.as_deref() {
        let pct = report.average_pct(spec)?;
        // The averaged badge carries no label in its rendered text.
        badges.push(generate_one(eff, pct, None, "average")?);
    }

    Ok(badges)
}

/// Run a single pipeline: build URL, fetch, save as `badge-<file_key>.svg`.
fn generate_one(
    eff: &Effective,
    pct: f64,
    url_label: Option<&str>,
    file_key: &str,
) -> Result<GeneratedBadge> {
    let url = badge::badge_url(&eff.service, pct, url_label);
    let body = fetch_badge(&url)?;
    let path = save_badge(&eff.output_dir, Some(file_key), &body)?;
    Ok(GeneratedBadge {
        key: file_key.to_string(),
        pct,
        color: Color::from_pct(pct),
        url,
        path,
    })
}
