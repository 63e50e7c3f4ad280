//! Spyce section format
//!
//! A spyce is stored as a block of comment lines:
//!
//! ```text
//! # spyce: start data/xy:bytes
//! #|aGVsbG8gd29ybGQK
//! # spyce: end data/xy:bytes
//! ```
//!
//! Blocks live in one of two sections: `source` (code text) and `data` (payloads). A
//! `# spyce: section <name>` anchor line marks where the first block of a section goes.
//! The comment leader depends on the host file, see [`CommentStyle`].

pub mod codec;

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, format::invalid_key};

/// Section a spyce belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Source,
    Data,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Source => "source",
            Section::Data => "data",
        }
    }

    /// Default spyce type for blocks in this section
    pub fn default_type(self) -> SpyceType {
        match self {
            Section::Source => SpyceType::Text,
            Section::Data => SpyceType::Bytes,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "source" => Ok(Section::Source),
            "data" => Ok(Section::Data),
            other => Err(format!("unknown section '{}'", other)),
        }
    }
}

/// How the content of a block is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpyceType {
    /// Lines stored verbatim
    Text,
    /// Base64 payload lines
    Bytes,
}

impl SpyceType {
    pub fn as_str(self) -> &'static str {
        match self {
            SpyceType::Text => "text",
            SpyceType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for SpyceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpyceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(SpyceType::Text),
            "bytes" => Ok(SpyceType::Bytes),
            other => Err(format!("unknown spyce type '{}'", other)),
        }
    }
}

/// Key of a spyce: `section/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpyceKey {
    section: Section,
    name: String,
}

impl SpyceKey {
    /// Create a key, validating the name
    pub fn new(section: Section, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name).map_err(|reason| {
            invalid_key(format!("{}/{}", section, name), reason)
        })?;
        Ok(Self { section, name })
    }

    /// Parse `[section/]name`; a bare name lives in the `data` section
    pub fn parse(key: &str) -> Result<Self> {
        let (section, name) = match key.split_once('/') {
            Some((section, name)) => {
                let section = section.parse().map_err(|e: String| invalid_key(key, e))?;
                (section, name)
            }
            None => (Section::Data, key),
        };
        Self::new(section, name)
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified key: `section/name:type`
    pub fn fq_key(&self, spyce_type: SpyceType) -> String {
        format!("{}:{}", self, spyce_type)
    }
}

impl fmt::Display for SpyceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.name)
    }
}

fn validate_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == ':')
    {
        return Err("name must not contain whitespace, '/' or ':'");
    }
    Ok(())
}

/// Comment leader used for marker and payload lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentStyle {
    /// `#` comments (Python, shell, YAML, ...)
    #[default]
    Hash,
    /// `//` comments (Rust, C, Go, JavaScript, ...)
    Slash,
}

const SLASH_EXTENSIONS: &[&str] = &[
    "rs", "c", "h", "cc", "cpp", "hpp", "go", "java", "js", "ts", "swift", "kt", "zig",
];

impl CommentStyle {
    /// Pick the comment style from a file extension
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if SLASH_EXTENSIONS.contains(&ext) => CommentStyle::Slash,
            _ => CommentStyle::Hash,
        }
    }

    pub fn leader(self) -> &'static str {
        match self {
            CommentStyle::Hash => "#",
            CommentStyle::Slash => "//",
        }
    }

    /// Prefix of base64 payload lines
    pub fn data_prefix(self) -> &'static str {
        match self {
            CommentStyle::Hash => "#|",
            CommentStyle::Slash => "//|",
        }
    }

    fn markers(self) -> &'static Markers {
        match self {
            CommentStyle::Hash => &HASH_MARKERS,
            CommentStyle::Slash => &SLASH_MARKERS,
        }
    }

    /// Render a start marker line
    pub fn start_line(self, key: &SpyceKey, spyce_type: SpyceType) -> String {
        format!("{} spyce: start {}\n", self.leader(), key.fq_key(spyce_type))
    }

    /// Render an end marker line
    pub fn end_line(self, key: &SpyceKey, spyce_type: SpyceType) -> String {
        format!("{} spyce: end {}\n", self.leader(), key.fq_key(spyce_type))
    }

    /// Match a start/end marker at the beginning of `line`
    pub fn match_directive(self, line: &str) -> Option<Directive<'_>> {
        let caps = self.markers().spyce.captures(line)?;
        let action = match caps.name("action")?.as_str() {
            "start" => Action::Start,
            _ => Action::End,
        };
        let section = caps.name("section")?.as_str().parse().ok()?;
        Some(Directive {
            action,
            section,
            name: caps.name("name")?.as_str(),
            spyce_type: caps.name("type").map(|m| m.as_str()),
        })
    }

    /// Match a section anchor at the beginning of `line`
    pub fn match_section(self, line: &str) -> Option<Section> {
        let caps = self.markers().section.captures(line)?;
        caps.name("section")?.as_str().parse().ok()
    }
}

/// Marker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    End,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Start => "start",
            Action::End => "end",
        })
    }
}

/// A matched start or end marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub action: Action,
    pub section: Section,
    pub name: &'a str,
    pub spyce_type: Option<&'a str>,
}

struct Markers {
    spyce: Regex,
    section: Regex,
}

impl Markers {
    // Both patterns are constant apart from the escaped leader.
    #[allow(clippy::unwrap_used)]
    fn new(leader: &str) -> Self {
        let leader = regex::escape(leader);
        Self {
            spyce: Regex::new(&format!(
                r"^{leader} spyce:\s+(?P<action>start|end)\s+(?P<section>source|data)/(?P<name>[^\s/:]+)(?::(?P<type>\S+))?"
            ))
            .unwrap(),
            section: Regex::new(&format!(
                r"^{leader} spyce:\s+section\s+(?P<section>source|data)\s*$"
            ))
            .unwrap(),
        }
    }
}

static HASH_MARKERS: LazyLock<Markers> = LazyLock::new(|| Markers::new("#"));
static SLASH_MARKERS: LazyLock<Markers> = LazyLock::new(|| Markers::new("//"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_key_defaults_to_data() {
        let key = SpyceKey::parse("xy").unwrap();
        assert_eq!(key.section(), Section::Data);
        assert_eq!(key.name(), "xy");
        assert_eq!(key.to_string(), "data/xy");
    }

    #[test]
    fn test_parse_section_key() {
        let key = SpyceKey::parse("source/api").unwrap();
        assert_eq!(key.section(), Section::Source);
        assert_eq!(key.fq_key(SpyceType::Text), "source/api:text");
    }

    #[test]
    fn test_parse_key_rejects_bad_section_and_names() {
        assert!(SpyceKey::parse("code/api").is_err());
        assert!(SpyceKey::parse("data/").is_err());
        assert!(SpyceKey::parse("data/a b").is_err());
        assert!(SpyceKey::parse("data/a:b").is_err());
        assert!(SpyceKey::parse("data/a/b").is_err());
    }

    #[test]
    fn test_keys_sort_source_first_then_by_name() {
        let mut keys: Vec<SpyceKey> = ["data/b", "source/z", "data/a", "source/api"]
            .iter()
            .map(|key| SpyceKey::parse(key).unwrap())
            .collect();
        keys.sort();
        let sorted: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, vec!["source/api", "source/z", "data/a", "data/b"]);
    }

    #[test]
    fn test_default_types() {
        assert_eq!(Section::Source.default_type(), SpyceType::Text);
        assert_eq!(Section::Data.default_type(), SpyceType::Bytes);
    }

    #[test]
    fn test_comment_style_for_path() {
        assert_eq!(CommentStyle::for_path(Path::new("a.py")), CommentStyle::Hash);
        assert_eq!(CommentStyle::for_path(Path::new("src/main.rs")), CommentStyle::Slash);
        assert_eq!(CommentStyle::for_path(Path::new("Makefile")), CommentStyle::Hash);
    }

    #[test]
    fn test_match_start_directive() {
        let d = CommentStyle::Hash
            .match_directive("# spyce: start data/wget-1.9.1.tar.gz:bytes\n")
            .unwrap();
        assert_eq!(d.action, Action::Start);
        assert_eq!(d.section, Section::Data);
        assert_eq!(d.name, "wget-1.9.1.tar.gz");
        assert_eq!(d.spyce_type, Some("bytes"));
    }

    #[test]
    fn test_match_end_directive_without_type() {
        let d = CommentStyle::Slash
            .match_directive("// spyce: end source/api\n")
            .unwrap();
        assert_eq!(d.action, Action::End);
        assert_eq!(d.spyce_type, None);
    }

    #[test]
    fn test_markers_must_start_the_line() {
        assert!(
            CommentStyle::Hash
                .match_directive("x = 1  # spyce: start data/xy")
                .is_none()
        );
        assert!(
            CommentStyle::Slash
                .match_directive("# spyce: start data/xy")
                .is_none()
        );
    }

    #[test]
    fn test_match_section_anchor() {
        assert_eq!(
            CommentStyle::Hash.match_section("# spyce: section data\n"),
            Some(Section::Data)
        );
        assert_eq!(CommentStyle::Hash.match_section("# spyce: section misc\n"), None);
    }

    #[test]
    fn test_marker_lines_round_trip_through_matcher() {
        let key = SpyceKey::parse("source/api").unwrap();
        let line = CommentStyle::Slash.start_line(&key, SpyceType::Text);
        assert_eq!(line, "// spyce: start source/api:text\n");
        let d = CommentStyle::Slash.match_directive(&line).unwrap();
        assert_eq!(d.name, "api");
    }
}
