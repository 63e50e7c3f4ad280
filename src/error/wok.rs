//! Wok project file errors

use std::path::Path;

use super::SpyceError;

/// Creates a wok error located at a YAML path inside the project file
///
/// The message reads `wok file <file>, section <section>: <message>`; the section part is
/// omitted for errors about the document root.
pub fn invalid(filename: &Path, section: Option<&str>, message: impl AsRef<str>) -> SpyceError {
    let mut text = format!("wok file {}", filename.display());
    if let Some(section) = section {
        text.push_str(", section ");
        text.push_str(section);
    }
    text.push_str(": ");
    text.push_str(message.as_ref());
    SpyceError::WokInvalid { message: text }
}

/// Creates a project file not found error
pub fn not_found(file_name: &str, start: &Path) -> SpyceError {
    SpyceError::WokNotFound {
        file_name: file_name.to_string(),
        start: start.display().to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> SpyceError {
    SpyceError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
