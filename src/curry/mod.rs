//! Spycy file document model
//!
//! A [`Curry`] holds the lines of a file together with the location of every spyce block
//! found in it. Blocks can be read back as [`Spyce`] values, replaced, added and removed;
//! the line indices of all other blocks and section anchors are kept in sync.
//!
//! ## Usage
//!
//! ```ignore
//! let mut curry = Curry::open("tool.py")?;
//! curry.insert(spyce)?;
//! curry.remove(&SpyceKey::parse("data/old.tgz")?);
//! curry.write(&WriteOptions::default())?;
//! ```

mod parse;
mod write;


pub use write::{DEFAULT_BACKUP_FORMAT, WriteOptions};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpyceError, file_read_failed, fs::not_found};
use crate::format::{CommentStyle, Section, SpyceKey, SpyceType};
use crate::resource::Spyce;

/// Location of one spyce block inside a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpyceItem {
    key: SpyceKey,
    spyce_type: SpyceType,
    /// Index of the start marker line
    start: usize,
    /// One past the last line of the block (end marker included when closed)
    end: usize,
    /// Whether a matching end marker was found
    closed: bool,
}

impl SpyceItem {
    pub fn key(&self) -> &SpyceKey {
        &self.key
    }

    pub fn section(&self) -> Section {
        self.key.section()
    }

    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn spyce_type(&self) -> SpyceType {
        self.spyce_type
    }

    pub fn fq_key(&self) -> String {
        self.key.fq_key(self.spyce_type)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Range of content lines, markers excluded
    fn content_range(&self) -> std::ops::Range<usize> {
        if self.closed {
            self.start + 1..self.end - 1
        } else {
            self.end..self.end
        }
    }
}

/// A parsed spycy file
#[derive(Debug, Clone)]
pub struct Curry {
    path: Option<PathBuf>,
    filename: String,
    style: CommentStyle,
    lines: Vec<String>,
    /// Blocks ordered by start line
    items: Vec<SpyceItem>,
    source_anchor: Option<usize>,
    data_anchor: Option<usize>,
    version: u64,
}

impl Curry {
    /// Read and parse a file; the comment style follows the file extension
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => not_found(path),
            _ => file_read_failed(path, e),
        })?;
        let mut curry = Self::parse(&text, CommentStyle::for_path(path), &path.display().to_string())?;
        curry.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), spyces = curry.len(), "loaded spycy file");
        Ok(curry)
    }

    /// Parse text that was not read from a file (`filename` is used in messages only)
    pub fn parse(text: &str, style: CommentStyle, filename: &str) -> Result<Self> {
        let lines = text.split_inclusive('\n').map(str::to_string).collect();
        let mut curry = Self {
            path: None,
            filename: filename.to_string(),
            style,
            lines,
            items: Vec::new(),
            source_anchor: None,
            data_anchor: None,
            version: 0,
        };
        curry.parse_lines()?;
        Ok(curry)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn style(&self) -> CommentStyle {
        self.style
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of spyce blocks
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Blocks in file order
    pub fn items(&self) -> &[SpyceItem] {
        &self.items
    }

    /// Keys in file order
    pub fn keys(&self) -> impl Iterator<Item = &SpyceKey> {
        self.items.iter().map(|item| &item.key)
    }

    pub fn item(&self, key: &SpyceKey) -> Option<&SpyceItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    pub fn contains(&self, key: &SpyceKey) -> bool {
        self.item(key).is_some()
    }

    /// Whether the content changed since parsing
    pub fn is_modified(&self) -> bool {
        self.version > 0
    }

    /// Block lines, markers included
    pub fn block_lines(&self, item: &SpyceItem) -> &[String] {
        &self.lines[item.start..item.end]
    }

    /// Block content lines, markers excluded
    pub fn content_lines(&self, item: &SpyceItem) -> &[String] {
        &self.lines[item.content_range()]
    }

    /// Decode the spyce stored under `key`
    pub fn get(&self, key: &SpyceKey) -> Result<Spyce> {
        let item = self.item(key).ok_or_else(|| SpyceError::SpyceNotFound {
            key: key.to_string(),
        })?;
        if !item.closed {
            return Err(SpyceError::SpyceNotSet {
                key: key.to_string(),
            });
        }
        Spyce::decode(
            item.key.clone(),
            item.spyce_type,
            self.style,
            self.content_lines(item),
        )
    }

    /// Add a spyce, replacing the block with the same key if there is one
    ///
    /// New blocks go after the last block of the same section, or after the section
    /// anchor. Without either, source blocks go after leading `#!` lines and data blocks
    /// at the end of the file.
    pub fn insert(&mut self, spyce: &Spyce) -> Result<()> {
        let key = spyce.key().clone();
        let start = match self.remove(&key) {
            Some(old) => old.start,
            None => self.insertion_point(key.section()),
        };
        if start == self.lines.len() {
            if let Some(last) = self.lines.last_mut() {
                if !last.ends_with('\n') {
                    last.push('\n');
                }
            }
        }

        let spyce_type = spyce.spyce_type();
        let mut block = Vec::new();
        block.push(self.style.start_line(&key, spyce_type));
        block.extend(spyce.encode(self.style));
        block.push(self.style.end_line(&key, spyce_type));
        let len = block.len();

        self.lines.splice(start..start, block);
        self.shift(start, len as isize, true);
        let item = SpyceItem {
            key,
            spyce_type,
            start,
            end: start + len,
            closed: true,
        };
        let pos = self.items.partition_point(|i| i.start < start);
        tracing::debug!(key = %item.key, line = start + 1, lines = len, "inserted spyce");
        self.items.insert(pos, item);
        self.version += 1;
        Ok(())
    }

    /// Remove the block stored under `key`
    pub fn remove(&mut self, key: &SpyceKey) -> Option<SpyceItem> {
        let pos = self.items.iter().position(|item| &item.key == key)?;
        let item = self.items.remove(pos);
        self.lines.drain(item.start..item.end);
        self.shift(item.start, -((item.end - item.start) as isize), false);
        self.version += 1;
        tracing::debug!(key = %item.key, line = item.start + 1, "removed spyce");
        Some(item)
    }

    fn insertion_point(&self, section: Section) -> usize {
        if let Some(end) = self
            .items
            .iter()
            .filter(|item| item.section() == section)
            .map(|item| item.end)
            .max()
        {
            return end;
        }
        if let Some(anchor) = self.anchor(section) {
            return anchor + 1;
        }
        match section {
            Section::Source => self
                .lines
                .iter()
                .position(|line| !line.starts_with("#!"))
                .unwrap_or(self.lines.len()),
            Section::Data => self.lines.len(),
        }
    }

    fn anchor(&self, section: Section) -> Option<usize> {
        match section {
            Section::Source => self.source_anchor,
            Section::Data => self.data_anchor,
        }
    }

    /// Move every block and anchor located after `at` by `diff` lines
    fn shift(&mut self, at: usize, diff: isize, inclusive: bool) {
        let moves = |index: usize| if inclusive { index >= at } else { index > at };
        let apply = |index: &mut usize| *index = index.saturating_add_signed(diff);
        for item in &mut self.items {
            if moves(item.start) {
                apply(&mut item.start);
                apply(&mut item.end);
            }
        }
        for anchor in [&mut self.source_anchor, &mut self.data_anchor]
            .into_iter()
            .flatten()
        {
            if moves(*anchor) {
                apply(anchor);
            }
        }
    }

    /// Render the document back to text
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}
