//! Scratch directories for the demo programs
//!
//! Scratch directories never land under the current working directory, even when
//! `TMPDIR` is relative.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, io_error};

/// Base directory for scratch directories, always absolute
///
/// A relative `TMPDIR` is ignored in favour of the platform default.
pub fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        dir
    } else {
        platform_temp_dir()
    }
}

#[cfg(windows)]
fn platform_temp_dir() -> PathBuf {
    ["TEMP", "TMP"]
        .iter()
        .find_map(|name| env::var_os(name).map(PathBuf::from))
        .filter(|dir| dir.is_absolute())
        .unwrap_or_else(|| PathBuf::from("C:\\Windows\\Temp"))
}

#[cfg(not(windows))]
fn platform_temp_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

/// Create a temporary directory removed when the returned guard drops
pub fn scoped_dir(prefix: &str) -> Result<TempDir> {
    let base = temp_dir_base();
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(&base)
        .map_err(|e| io_error(format!("Failed to create temp dir in {}: {}", base.display(), e)))?;
    tracing::debug!(path = %dir.path().display(), "created scratch directory");
    Ok(dir)
}
