//! Error types and handling for spyce
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`format`]: Marker parsing and content decoding errors
//! - [`fs`]: File system and archive errors
//! - [`flavor`]: Content producer errors
//! - [`wok`]: Project file errors

pub mod flavor;
pub mod format;
pub mod fs;
pub mod wok;

pub use format::{duplicated_spyce, unexpected_directive, unknown_spyce_type};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spyce operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpyceError {
    // Format errors
    #[error("{location}: unexpected directive \"{directive}\"")]
    #[diagnostic(
        code(spyce::format::unexpected_directive),
        help("Every 'spyce: end' marker must close the block opened just before it")
    )]
    UnexpectedDirective { location: String, directive: String },

    #[error("{location}: duplicated spyce {key}")]
    #[diagnostic(code(spyce::format::duplicated))]
    DuplicatedSpyce { location: String, key: String },

    #[error("{location}: unknown spyce type '{spyce_type}'")]
    #[diagnostic(
        code(spyce::format::unknown_type),
        help("Supported spyce types: text, bytes")
    )]
    UnknownSpyceType {
        location: String,
        spyce_type: String,
    },

    #[error("Invalid spyce key '{key}': {reason}")]
    #[diagnostic(
        code(spyce::format::invalid_key),
        help("Keys look like [section/]name, with section 'source' or 'data'")
    )]
    InvalidKey { key: String, reason: String },

    #[error("Failed to decode spyce {key}: {reason}")]
    #[diagnostic(code(spyce::format::decode_failed))]
    DecodeFailed { key: String, reason: String },

    // Lookup errors
    #[error("spyce {key} not found")]
    #[diagnostic(code(spyce::lookup::not_found))]
    SpyceNotFound { key: String },

    #[error("spyce {key} is defined but not set")]
    #[diagnostic(
        code(spyce::lookup::not_set),
        help("The start marker of this block has no matching end marker")
    )]
    SpyceNotSet { key: String },

    #[error("Invalid filter '{pattern}': {reason}")]
    #[diagnostic(
        code(spyce::filter::invalid),
        help("Filters look like [~][section/][name][:type], e.g. 'source/api', '~data/x.tgz', ':bytes'")
    )]
    InvalidFilter { pattern: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(spyce::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(spyce::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(spyce::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Archive operation failed on {path}: {reason}")]
    #[diagnostic(code(spyce::fs::archive_failed))]
    ArchiveFailed { path: String, reason: String },

    #[error("{name}: path is not set")]
    #[diagnostic(
        code(spyce::fs::path_not_set),
        help("Pass an explicit output path when the input was not read from a file")
    )]
    PathNotSet { name: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(spyce::fs::io_error))]
    IoError { message: String },

    // Flavor errors
    #[error("{flavor}: {message}")]
    #[diagnostic(code(spyce::flavor::invalid))]
    FlavorInvalid { flavor: String, message: String },

    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(
        code(spyce::flavor::fetch_failed),
        help("Check that the URL is correct and reachable")
    )]
    FetchFailed { url: String, reason: String },

    // Wok errors
    #[error("No {file_name} found in {start} or any parent directory")]
    #[diagnostic(
        code(spyce::wok::not_found),
        help("Create a project file or pass it explicitly with --project")
    )]
    WokNotFound { file_name: String, start: String },

    #[error("{message}")]
    #[diagnostic(code(spyce::wok::invalid))]
    WokInvalid { message: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(spyce::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

impl From<std::io::Error> for SpyceError {
    fn from(err: std::io::Error) -> Self {
        SpyceError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SpyceError {
    fn from(err: serde_json::Error) -> Self {
        SpyceError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SpyceError>;
