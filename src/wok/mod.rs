//! Wok project files
//!
//! A wok project (`.wok-project.yaml`) lists target files and the spyces each of them
//! should carry. Building a target loads its base file, inserts every spyce and writes
//! the result to the target path.
//!
//! ```yaml
//! wok:
//!   files:
//!     dist/tool.py:
//!       source: tool.py
//!       spyces:
//!         wget-1.9.1.tar.gz:
//!           category: url
//!           url: https://ftp.gnu.org/gnu/wget/wget-1.9.1.tar.gz
//!         assets:
//!           category: dir
//!           path: assets
//! ```

mod config;

pub use config::{SpyceEntry, parse_wok};

use std::fs;
use std::path::{Path, PathBuf};

use crate::curry::{Curry, WriteOptions};
use crate::error::{Result, file_read_failed, wok::not_found};
use crate::flavor::Flavor;

/// Project file name searched for in the current directory and its parents
pub const DEFAULT_WOK_FILENAME: &str = ".wok-project.yaml";

/// Find the nearest project file, walking up from `start`
pub fn find_wok_path(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_WOK_FILENAME))
        .find(|path| path.is_file())
}

/// Locate the project file, or fail with a helpful error
pub fn require_wok_path(start: &Path) -> Result<PathBuf> {
    find_wok_path(start).ok_or_else(|| not_found(DEFAULT_WOK_FILENAME, start))
}

/// Load and validate a project file
pub fn load_wok(path: &Path) -> Result<Wok> {
    let path = std::path::absolute(path).map_err(|e| file_read_failed(path, e))?;
    let base_dir = path.parent().unwrap_or(Path::new("/")).to_path_buf();
    let text = fs::read_to_string(&path).map_err(|e| file_read_failed(&path, e))?;
    tracing::debug!(path = %path.display(), "loading wok project");
    parse_wok(&base_dir, &path, &text)
}

/// One target file and its spyces
#[derive(Debug, Clone)]
pub struct WokFile {
    path: PathBuf,
    source: PathBuf,
    spyces: Vec<(String, Flavor)>,
}

impl WokFile {
    pub fn new(path: PathBuf, source: Option<PathBuf>, spyces: Vec<(String, Flavor)>) -> Self {
        let source = source.unwrap_or_else(|| path.clone());
        Self {
            path,
            source,
            spyces,
        }
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn spyces(&self) -> &[(String, Flavor)] {
        &self.spyces
    }

    /// File the build starts from
    ///
    /// The source is used when the target is missing or the source changed after the
    /// target was last written; otherwise the target is updated in place.
    pub fn base_file(&self) -> Result<&Path> {
        if !self.source.is_file() {
            return Err(crate::error::wok::invalid(
                &self.path,
                None,
                format!("source file {} missing", self.source.display()),
            ));
        }
        if !self.path.is_file() {
            return Ok(&self.source);
        }
        let source_time = modified(&self.source)?;
        let target_time = modified(&self.path)?;
        if source_time > target_time {
            Ok(&self.source)
        } else {
            Ok(&self.path)
        }
    }

    /// Build the target file
    pub fn build(&self) -> Result<PathBuf> {
        let base = self.base_file()?;
        tracing::info!("{} -> {}", base.display(), self.path.display());
        let mut curry = Curry::open(base)?;
        for (_, flavor) in &self.spyces {
            curry.insert(&flavor.produce()?)?;
        }
        curry.write(&WriteOptions::default().with_output(Some(self.path.clone())))?;
        Ok(self.path.clone())
    }
}

fn modified(path: &Path) -> Result<std::time::SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| file_read_failed(path, e))
}

/// A loaded project
#[derive(Debug, Clone)]
pub struct Wok {
    files: Vec<WokFile>,
}

impl Wok {
    pub fn new(files: Vec<WokFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[WokFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Build every target, in project file order
    pub fn build(&self) -> Result<Vec<PathBuf>> {
        self.files.iter().map(WokFile::build).collect()
    }
}
