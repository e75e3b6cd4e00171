//! Badge retrieval over HTTP.

use crate::errors::{BadgeError, Result};
use std::io::Read;

/// Fetch the rendered badge body from `url`.
///
/// One blocking GET, body accumulated to completion. No retries; any
/// transport failure surfaces to the caller.
pub fn fetch_badge(url: &str) -> Result<Vec<u8>> {
    let resp = ureq::get(url)
        .call()
        .map_err(|e| BadgeError::Transport(e.to_string()))?;
    let mut body = Vec::new();
    resp.into_reader()
        .read_to_end(&mut body)
        .map_err(|e| BadgeError::Transport(e.to_string()))?;
    Ok(body)
}
