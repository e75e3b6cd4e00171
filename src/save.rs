//! Badge persistence into the output directory.

use crate::errors::{BadgeError, Result};
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a badge: `badge.svg`, or `badge-<key>.svg` with a key.
pub fn badge_file_name(key: Option<&str>) -> String {
    match key {
        Some(k) => format!("badge-{}.svg", k),
        None => "badge.svg".to_string(),
    }
}

/// Persist a fetched badge body under `output_dir`, overwriting any
/// existing file.
///
/// The directory (including intermediates) is created if missing. A
/// directory-creation failure is logged and skips only this badge,
/// returning `Ok(None)`; a file-write failure is an error.
pub fn save_badge(output_dir: &Path, key: Option<&str>, body: &[u8]) -> Result<Option<PathBuf>> {
    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!(
                "Could not create output directory {}: {}",
                output_dir.display(),
                e
            )
        );
        return Ok(None);
    }
    let path = output_dir.join(badge_file_name(key));
    fs::write(&path, body).map_err(|e| BadgeError::Filesystem {
        path: path.clone(),
        source: e,
    })?;
    Ok(Some(path))
}
