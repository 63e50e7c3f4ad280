//! Flavors: producers of spyce content
//!
//! A [`Flavor`] describes where the content of a spyce comes from (a source file, a data
//! file, a directory packed as a gzip tarball, or a URL) together with the key and type it
//! will be stored under. Defaults are filled in and validated when the flavor is built;
//! the content itself is only read by [`Flavor::produce`].

use std::fs;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::flavor::{fetch_failed, invalid};
use crate::error::{Result, file_read_failed, fs::archive_failed};
use crate::format::{Section, SpyceKey, SpyceType};
use crate::resource::Spyce;

/// Kind of content origin, as named in project files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    File,
    Source,
    Dir,
    Url,
}

/// Where the content of a spyce comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Code file, stored in the source section
    Source(PathBuf),
    /// Data file
    File(PathBuf),
    /// Directory, stored as a gzip tarball
    Dir(PathBuf),
    /// Downloaded with an HTTP GET
    Url(String),
}

impl Origin {
    /// Build an origin of the given category from a path or URL string
    pub fn from_category(category: Category, location: impl Into<String>) -> Self {
        let location = location.into();
        match category {
            Category::File => Origin::File(PathBuf::from(location)),
            Category::Source => Origin::Source(PathBuf::from(location)),
            Category::Dir => Origin::Dir(PathBuf::from(location)),
            Category::Url => Origin::Url(location),
        }
    }

    fn flavor_name(&self) -> &'static str {
        match self {
            Origin::Source(_) => "SourceFlavor",
            Origin::File(_) => "FileFlavor",
            Origin::Dir(_) => "DirFlavor",
            Origin::Url(_) => "UrlFlavor",
        }
    }

    fn default_section(&self) -> Section {
        match self {
            Origin::Source(_) => Section::Source,
            _ => Section::Data,
        }
    }

    fn default_name(&self) -> Option<String> {
        match self {
            Origin::Source(path) | Origin::File(path) | Origin::Dir(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Origin::Url(url) => reqwest::Url::parse(url).ok().and_then(|url| {
                url.path_segments()
                    .and_then(|mut segments| segments.next_back().map(str::to_string))
                    .filter(|name| !name.is_empty())
            }),
        }
    }

    fn check(&self) -> Result<()> {
        let flavor = self.flavor_name();
        match self {
            Origin::Source(path) | Origin::File(path) => {
                if !path.is_file() {
                    return Err(invalid(flavor, format!("{} is not a file", path.display())));
                }
            }
            Origin::Dir(path) => {
                if !path.is_dir() {
                    return Err(invalid(
                        flavor,
                        format!("{} is not a directory", path.display()),
                    ));
                }
            }
            Origin::Url(url) => {
                reqwest::Url::parse(url)
                    .map_err(|e| invalid(flavor, format!("invalid url {}: {}", url, e)))?;
            }
        }
        Ok(())
    }
}

/// A validated content producer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    origin: Origin,
    key: SpyceKey,
    spyce_type: SpyceType,
}

impl Flavor {
    /// Build a flavor, filling in defaults
    ///
    /// The section defaults to `source` for source files and `data` otherwise, the name to
    /// the file name (or the last URL path segment), the type to the section's default.
    pub fn new(
        origin: Origin,
        section: Option<Section>,
        name: Option<String>,
        spyce_type: Option<SpyceType>,
    ) -> Result<Self> {
        origin.check()?;
        let flavor = origin.flavor_name();
        let section = section.unwrap_or_else(|| origin.default_section());
        let name = name
            .or_else(|| origin.default_name())
            .ok_or_else(|| invalid(flavor, "spyce name not set"))?;
        let spyce_type = spyce_type.unwrap_or_else(|| section.default_type());
        if matches!(origin, Origin::Dir(_)) && spyce_type != SpyceType::Bytes {
            return Err(invalid(flavor, "dir spyce type must be 'bytes'"));
        }
        let key = SpyceKey::new(section, name)?;
        Ok(Self {
            origin,
            key,
            spyce_type,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn key(&self) -> &SpyceKey {
        &self.key
    }

    pub fn spyce_type(&self) -> SpyceType {
        self.spyce_type
    }

    /// Read, pack or download the content
    pub fn produce(&self) -> Result<Spyce> {
        let bytes = match &self.origin {
            Origin::Source(path) | Origin::File(path) => {
                fs::read(path).map_err(|e| file_read_failed(path, e))?
            }
            Origin::Dir(path) => pack_dir(path)?,
            Origin::Url(url) => fetch(url)?,
        };
        tracing::info!(key = %self.key, bytes = bytes.len(), origin = ?self.origin, "produced spyce");
        Spyce::from_bytes(self.key.clone(), self.spyce_type, bytes)
    }
}

/// Pack a directory into a gzip tarball rooted at the directory's name
///
/// Entries are added in sorted order so that unchanged trees pack identically.
pub fn pack_dir(dir: &Path) -> Result<Vec<u8>> {
    let root = dir
        .file_name()
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| archive_failed(dir, e))?;
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let name = root.join(relative);
        builder
            .append_path_with_name(entry.path(), &name)
            .map_err(|e| archive_failed(entry.path(), e))?;
    }

    let encoder = builder.into_inner().map_err(|e| archive_failed(dir, e))?;
    encoder.finish().map_err(|e| archive_failed(dir, e))
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    tracing::info!(url, "downloading");
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| fetch_failed(url, e))?;
    let bytes = response.bytes().map_err(|e| fetch_failed(url, e))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_flavor_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("payload.bin");
        fs::write(&path, [0u8, 1, 2]).unwrap();
        let flavor = Flavor::new(Origin::File(path), None, None, None).unwrap();
        assert_eq!(flavor.key().to_string(), "data/payload.bin");
        assert_eq!(flavor.spyce_type(), SpyceType::Bytes);
        assert_eq!(flavor.produce().unwrap().as_bytes(), &[0, 1, 2]);
    }

    #[test]
    fn test_source_flavor_defaults_to_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lib.py");
        fs::write(&path, "def f():\n    pass\n").unwrap();
        let flavor = Flavor::new(Origin::Source(path), None, Some("lib".into()), None).unwrap();
        assert_eq!(flavor.key().to_string(), "source/lib");
        let spyce = flavor.produce().unwrap();
        assert_eq!(spyce.fq_key(), "source/lib:text");
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = Flavor::new(Origin::File(temp.path().join("nope")), None, None, None)
            .unwrap_err();
        assert!(err.to_string().contains("is not a file"));
        // A directory is not a file either
        assert!(Flavor::new(Origin::File(temp.path().to_path_buf()), None, None, None).is_err());
    }

    #[test]
    fn test_dir_flavor_packs_tarball() {
        let temp = TempDir::new().unwrap();
        let tree = temp.path().join("tree");
        fs::create_dir_all(tree.join("sub")).unwrap();
        fs::write(tree.join("a.txt"), "a\n").unwrap();
        fs::write(tree.join("sub/b.txt"), "b\n").unwrap();

        let flavor = Flavor::new(Origin::Dir(tree.clone()), None, Some("tree.tgz".into()), None)
            .unwrap();
        let spyce = flavor.produce().unwrap();
        let out = temp.path().join("out");
        spyce.untar(&out).unwrap();
        assert_eq!(fs::read_to_string(out.join("tree/a.txt")).unwrap(), "a\n");
        assert_eq!(fs::read_to_string(out.join("tree/sub/b.txt")).unwrap(), "b\n");

        // Packing is deterministic for an unchanged tree
        assert_eq!(pack_dir(&tree).unwrap(), pack_dir(&tree).unwrap());
    }

    #[test]
    fn test_dir_flavor_requires_bytes() {
        let temp = TempDir::new().unwrap();
        let err = Flavor::new(
            Origin::Dir(temp.path().to_path_buf()),
            None,
            Some("x".into()),
            Some(SpyceType::Text),
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be 'bytes'"));
    }

    #[test]
    fn test_url_flavor_default_name() {
        let flavor = Flavor::new(
            Origin::Url("https://ftp.gnu.org/gnu/wget/wget-1.9.1.tar.gz".into()),
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(flavor.key().to_string(), "data/wget-1.9.1.tar.gz");
    }

    #[test]
    fn test_url_flavor_needs_name_when_path_is_empty() {
        let err = Flavor::new(Origin::Url("https://example.com/".into()), None, None, None)
            .unwrap_err();
        assert!(err.to_string().contains("spyce name not set"));
        assert!(Flavor::new(Origin::Url("not a url".into()), None, None, None).is_err());
    }

    #[test]
    fn test_origin_from_category() {
        assert_eq!(
            Origin::from_category(Category::Url, "https://x/y"),
            Origin::Url("https://x/y".into())
        );
        assert_eq!(
            Origin::from_category(Category::Dir, "d"),
            Origin::Dir(PathBuf::from("d"))
        );
    }
}
