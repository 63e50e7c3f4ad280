//! Marker parsing and decoding errors
//!
//! Locations are rendered as `file@line`, with 1-based line numbers.

use super::SpyceError;

fn location(filename: &str, line_index: usize) -> String {
    format!("{}@{}", filename, line_index + 1)
}

/// Creates an unexpected directive error
pub fn unexpected_directive(
    filename: &str,
    line_index: usize,
    directive: impl Into<String>,
) -> SpyceError {
    SpyceError::UnexpectedDirective {
        location: location(filename, line_index),
        directive: directive.into(),
    }
}

/// Creates a duplicated spyce error
pub fn duplicated_spyce(filename: &str, line_index: usize, key: impl Into<String>) -> SpyceError {
    SpyceError::DuplicatedSpyce {
        location: location(filename, line_index),
        key: key.into(),
    }
}

/// Creates an unknown spyce type error
pub fn unknown_spyce_type(
    filename: &str,
    line_index: usize,
    spyce_type: impl Into<String>,
) -> SpyceError {
    SpyceError::UnknownSpyceType {
        location: location(filename, line_index),
        spyce_type: spyce_type.into(),
    }
}

/// Creates an invalid key error
pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> SpyceError {
    SpyceError::InvalidKey {
        key: key.into(),
        reason: reason.into(),
    }
}

/// Creates a decode failed error
pub fn decode_failed(key: impl Into<String>, reason: impl ToString) -> SpyceError {
    SpyceError::DecodeFailed {
        key: key.into(),
        reason: reason.to_string(),
    }
}
