//! Output location resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{IconError, Result};

/// Default prefix for synthesized output directories.
pub const DEFAULT_DIR_PREFIX: &str = "AppIcon.appiconset";

/// Seconds since the Unix epoch.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Name of the default output directory for a given timestamp.
pub fn default_dir_name(prefix: &str, timestamp: u64) -> String {
    format!("{}_{}", prefix, timestamp)
}

/// Pick the output directory without touching the filesystem.
///
/// An explicit directory is made absolute against the current directory.
/// Otherwise a timestamped directory is placed next to the source image.
pub fn output_dir_for(
    explicit: Option<&Path>,
    source: &Path,
    prefix: &str,
    timestamp: u64,
) -> Result<PathBuf> {
    match explicit {
        Some(dir) if dir.is_absolute() => Ok(dir.to_path_buf()),
        Some(dir) => Ok(env::current_dir()?.join(dir)),
        None => {
            let parent = source.parent().unwrap_or_else(|| Path::new("."));
            Ok(parent.join(default_dir_name(prefix, timestamp)))
        }
    }
}

/// Create the directory and its parents. An existing directory is reused.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| IconError::OutputDirCreateFailure {
        path: path.to_path_buf(),
        source,
    })
}
