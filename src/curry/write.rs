//! Writing a curry back to disk, with optional backups

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpyceError, file_read_failed, file_write_failed};

use super::Curry;

/// Default backup path format; `{path}` and `{timestamp}` are substituted
pub const DEFAULT_BACKUP_FORMAT: &str = "{path}.bck.{timestamp}";

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Where and how to write a curry
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Write here instead of updating the input file in place
    pub output: Option<PathBuf>,
    /// Backup format used when the input file is overwritten
    pub backup: Option<String>,
}

impl WriteOptions {
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_backup(mut self, backup: Option<String>) -> Self {
        self.backup = backup;
        self
    }
}

impl Curry {
    /// Write the document
    ///
    /// With an explicit output the document is always written there. Otherwise the input
    /// file is updated in place, but only when the content changed. Returns the path that
    /// was written, if any.
    pub fn write(&self, options: &WriteOptions) -> Result<Option<PathBuf>> {
        let output = match &options.output {
            Some(output) => output.clone(),
            None if self.is_modified() => match &self.path {
                Some(path) => path.clone(),
                None => {
                    return Err(SpyceError::PathNotSet {
                        name: self.filename.clone(),
                    });
                }
            },
            None => {
                tracing::debug!(file = %self.filename, "unchanged, nothing to write");
                return Ok(None);
            }
        };

        let input = self.path.as_deref().filter(|path| path.is_file());
        if let (Some(format), Some(input)) = (&options.backup, input) {
            if same_file(input, &output) {
                backup(input, format)?;
            }
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
            }
        }
        fs::write(&output, self.render()).map_err(|e| file_write_failed(&output, e))?;
        if let Some(input) = input {
            if !same_file(input, &output) {
                let permissions = fs::metadata(input)
                    .map_err(|e| file_read_failed(input, e))?
                    .permissions();
                fs::set_permissions(&output, permissions)
                    .map_err(|e| file_write_failed(&output, e))?;
            }
        }
        tracing::info!(path = %output.display(), spyces = self.len(), "wrote spycy file");
        Ok(Some(output))
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Expand a backup format for `path` at the current local time
pub fn backup_path(path: &Path, format: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    PathBuf::from(
        format
            .replace("{path}", &path.display().to_string())
            .replace("{timestamp}", &timestamp),
    )
}

fn backup(path: &Path, format: &str) -> Result<PathBuf> {
    let target = backup_path(path, format);
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
        }
    }
    fs::copy(path, &target).map_err(|e| file_write_failed(&target, e))?;
    tracing::info!(from = %path.display(), to = %target.display(), "saved backup");
    Ok(target)
}
