//! File system errors

use std::path::Path;

use super::SpyceError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> SpyceError {
    SpyceError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> SpyceError {
    SpyceError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> SpyceError {
    SpyceError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an archive error
pub fn archive_failed(path: &Path, reason: impl ToString) -> SpyceError {
    SpyceError::ArchiveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SpyceError {
    SpyceError::IoError {
        message: message.into(),
    }
}
