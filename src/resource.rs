//! Spyce values
//!
//! A [`Spyce`] is the decoded content of one block, detached from the file it came from.
//! It is the handle returned by lookups: it knows its name, can be written to disk, and
//! can be extracted as a tar archive.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Result, SpyceError, format::decode_failed, fs::archive_failed};
use crate::format::codec;
use crate::format::{CommentStyle, Section, SpyceKey, SpyceType};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decoded block content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Bytes(Vec<u8>),
}

impl Content {
    pub fn spyce_type(&self) -> SpyceType {
        match self {
            Content::Text(_) => SpyceType::Text,
            Content::Bytes(_) => SpyceType::Bytes,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Content::Text(text) => text.as_bytes(),
            Content::Bytes(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A named piece of embedded content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spyce {
    key: SpyceKey,
    content: Content,
}

impl Spyce {
    pub fn new(key: SpyceKey, content: Content) -> Self {
        Self { key, content }
    }

    /// Build a spyce of the given type from raw bytes
    ///
    /// Text spyces must be valid UTF-8.
    pub fn from_bytes(key: SpyceKey, spyce_type: SpyceType, bytes: Vec<u8>) -> Result<Self> {
        let content = match spyce_type {
            SpyceType::Bytes => Content::Bytes(bytes),
            SpyceType::Text => Content::Text(
                String::from_utf8(bytes).map_err(|e| decode_failed(key.to_string(), e))?,
            ),
        };
        Ok(Self::new(key, content))
    }

    /// Decode the content lines of a block (markers excluded)
    pub fn decode(
        key: SpyceKey,
        spyce_type: SpyceType,
        style: CommentStyle,
        lines: &[String],
    ) -> Result<Self> {
        let content = match spyce_type {
            SpyceType::Text => Content::Text(codec::decode_text(lines)),
            SpyceType::Bytes => Content::Bytes(
                codec::decode_bytes(style, lines).map_err(|e| decode_failed(key.to_string(), e))?,
            ),
        };
        Ok(Self::new(key, content))
    }

    /// Encode the content into block lines (markers excluded)
    pub fn encode(&self, style: CommentStyle) -> Vec<String> {
        match &self.content {
            Content::Text(text) => codec::encode_text(text),
            Content::Bytes(bytes) => codec::encode_bytes(style, bytes),
        }
    }

    pub fn key(&self) -> &SpyceKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn section(&self) -> Section {
        self.key.section()
    }

    pub fn spyce_type(&self) -> SpyceType {
        self.content.spyce_type()
    }

    pub fn fq_key(&self) -> String {
        self.key.fq_key(self.spyce_type())
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Write the content to `path`, creating missing parent directories
    pub fn write_file(&self, path: &Path) -> Result<()> {
        create_parent(path)?;
        fs::write(path, self.as_bytes()).map_err(|e| crate::error::file_write_failed(path, e))?;
        tracing::debug!(key = %self.key, path = %path.display(), bytes = self.content.len(), "wrote spyce");
        Ok(())
    }

    /// Extract the content as a tar archive into `dir`
    ///
    /// Gzip compression is detected from the payload's magic bytes.
    pub fn untar(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| crate::error::file_write_failed(dir, e))?;
        let bytes = self.as_bytes();
        let reader: Box<dyn Read + '_> = if bytes.starts_with(&GZIP_MAGIC) {
            Box::new(GzDecoder::new(bytes))
        } else {
            Box::new(bytes)
        };
        tar::Archive::new(reader)
            .unpack(dir)
            .map_err(|e| archive_failed(dir, e))?;
        tracing::debug!(key = %self.key, dir = %dir.display(), "extracted spyce");
        Ok(())
    }
}

impl std::fmt::Display for Spyce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fq_key())
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SpyceError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(())
}
