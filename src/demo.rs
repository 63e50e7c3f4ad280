//! Demo programs reading their own embedded resources
//!
//! Both demos take the lookup, a scratch directory and an output writer as arguments so
//! that the binaries stay thin and the behavior can be exercised against any
//! [`ResourceLookup`].

use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, fs::archive_failed};
use crate::lookup::ResourceLookup;

/// Result of the check-and-extract demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The key is unknown
    NotDefined,
    /// The key is known but has no value
    NotSet,
    /// The archive was written and extracted
    Extracted {
        archive: PathBuf,
        dir: PathBuf,
        /// Extracted entries relative to `dir`, sorted
        entries: Vec<PathBuf>,
    },
}

impl ExtractOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractOutcome::Extracted { .. } => 0,
            ExtractOutcome::NotDefined => 1,
            ExtractOutcome::NotSet => 2,
        }
    }
}

/// Write the resource stored under `key` into `work_dir`
pub fn export(
    lookup: &dyn ResourceLookup,
    key: &str,
    work_dir: &Path,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    let spyce = lookup.get(key)?;
    let path = work_dir.join(spyce.name());
    spyce.write_file(&path)?;
    writeln!(out, "spyce {} successfully written", key)?;
    Ok(path)
}

/// Check, fetch and extract the archive stored under `key`
///
/// Nothing is written to `work_dir` unless the key is both defined and set.
pub fn extract(
    lookup: &dyn ResourceLookup,
    key: &str,
    work_dir: &Path,
    out: &mut dyn Write,
) -> Result<ExtractOutcome> {
    if !lookup.is_defined(key) {
        writeln!(out, "spyce {} not defined", key)?;
        return Ok(ExtractOutcome::NotDefined);
    }
    if !lookup.is_set(key) {
        writeln!(out, "spyce {} not set", key)?;
        return Ok(ExtractOutcome::NotSet);
    }

    let spyce = lookup.get(key)?;
    let archive = work_dir.join(spyce.name());
    spyce.write_file(&archive)?;
    let dir = work_dir.join(extract_dir_name(spyce.name()));
    spyce.untar(&dir)?;

    let entries = list_tree(&dir)?;
    for entry in &entries {
        writeln!(out, "{}", entry.display())?;
    }
    writeln!(out, "spyce {} successfully extracted", key)?;
    Ok(ExtractOutcome::Extracted {
        archive,
        dir,
        entries,
    })
}

/// Directory name for an archive: the name without its archive suffix
pub fn extract_dir_name(name: &str) -> String {
    for suffix in [".tar.gz", ".tgz", ".tar"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            if !stem.is_empty() {
                return stem.to_string();
            }
        }
    }
    format!("{}.d", name)
}

/// All entries below `dir`, relative to it, in sorted walk order
pub fn list_tree(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| archive_failed(dir, e))?;
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        entries.push(relative.to_path_buf());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    use super::*;
    use crate::error::SpyceError;
    use crate::format::SpyceKey;
    use crate::resource::{Content, Spyce};

    /// Lookup double recording whether the payload was fetched
    struct MockLookup {
        defined: bool,
        set: bool,
        name: &'static str,
        payload: Vec<u8>,
        fetched: std::cell::Cell<bool>,
    }

    impl MockLookup {
        fn new(defined: bool, set: bool, payload: Vec<u8>) -> Self {
            Self {
                defined,
                set,
                name: "pkg-1.0.tar.gz",
                payload,
                fetched: std::cell::Cell::new(false),
            }
        }
    }

    impl ResourceLookup for MockLookup {
        fn is_defined(&self, _key: &str) -> bool {
            self.defined
        }

        fn is_set(&self, _key: &str) -> bool {
            self.set
        }

        fn get(&self, key: &str) -> Result<Spyce> {
            self.fetched.set(true);
            if !self.defined {
                return Err(SpyceError::SpyceNotFound {
                    key: key.to_string(),
                });
            }
            Ok(Spyce::new(
                SpyceKey::parse(self.name)?,
                Content::Bytes(self.payload.clone()),
            ))
        }
    }

    fn archive(files: &[(&str, &str)]) -> Vec<u8> {
        let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, data.as_bytes()).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    fn run(lookup: &MockLookup) -> (TempDir, ExtractOutcome, String) {
        let work = TempDir::new().unwrap();
        let mut out = Vec::new();
        let outcome = extract(lookup, "pkg-1.0.tar.gz", work.path(), &mut out).unwrap();
        (work, outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_not_defined_exits_1_without_io() {
        let lookup = MockLookup::new(false, false, Vec::new());
        let (work, outcome, out) = run(&lookup);
        assert_eq!(outcome, ExtractOutcome::NotDefined);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(out, "spyce pkg-1.0.tar.gz not defined\n");
        assert!(!lookup.fetched.get());
        assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_not_set_exits_2_without_io() {
        let lookup = MockLookup::new(true, false, Vec::new());
        let (work, outcome, out) = run(&lookup);
        assert_eq!(outcome, ExtractOutcome::NotSet);
        assert_eq!(outcome.exit_code(), 2);
        assert_eq!(out, "spyce pkg-1.0.tar.gz not set\n");
        assert!(!lookup.fetched.get());
        assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_extract_lists_sorted_tree() {
        let payload = archive(&[
            ("pkg-1.0/src/main.c", "int main(void) { return 0; }\n"),
            ("pkg-1.0/README", "pkg\n"),
            ("pkg-1.0/Makefile", "all:\n"),
        ]);
        let lookup = MockLookup::new(true, true, payload.clone());
        let (work, outcome, out) = run(&lookup);
        assert_eq!(outcome.exit_code(), 0);

        let ExtractOutcome::Extracted {
            archive,
            dir,
            entries,
        } = outcome
        else {
            panic!("expected extraction");
        };
        assert_eq!(fs::read(&archive).unwrap(), payload);
        assert_eq!(dir, work.path().join("pkg-1.0"));

        let expected: Vec<PathBuf> = [
            "pkg-1.0",
            "pkg-1.0/Makefile",
            "pkg-1.0/README",
            "pkg-1.0/src",
            "pkg-1.0/src/main.c",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(entries, expected);

        let printed: Vec<&str> = out.lines().collect();
        assert_eq!(printed.len(), expected.len() + 1);
        assert_eq!(printed[1], PathBuf::from("pkg-1.0/Makefile").display().to_string());
        assert_eq!(printed.last(), Some(&"spyce pkg-1.0.tar.gz successfully extracted"));
    }

    #[test]
    fn test_extract_propagates_bad_archive() {
        let lookup = MockLookup::new(true, true, vec![0x1f, 0x8b, 8, 0]);
        let work = TempDir::new().unwrap();
        let mut out = Vec::new();
        assert!(extract(&lookup, "pkg-1.0.tar.gz", work.path(), &mut out).is_err());
    }

    #[test]
    fn test_export_writes_payload() {
        let lookup = MockLookup::new(true, true, b"xy payload".to_vec());
        let work = TempDir::new().unwrap();
        let mut out = Vec::new();
        let path = export(&lookup, "pkg-1.0.tar.gz", work.path(), &mut out).unwrap();
        assert_eq!(fs::read(path).unwrap(), b"xy payload");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "spyce pkg-1.0.tar.gz successfully written\n"
        );
    }

    #[test]
    fn test_export_missing_key_is_an_error() {
        let lookup = MockLookup::new(false, false, Vec::new());
        let work = TempDir::new().unwrap();
        let mut out = Vec::new();
        assert!(export(&lookup, "xy", work.path(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_extract_dir_name() {
        assert_eq!(extract_dir_name("wget-1.9.1.tar.gz"), "wget-1.9.1");
        assert_eq!(extract_dir_name("x.tgz"), "x");
        assert_eq!(extract_dir_name("x.tar"), "x");
        assert_eq!(extract_dir_name("blob"), "blob.d");
        assert_eq!(extract_dir_name(".tar"), ".tar.d");
    }
}
