//! Flavor errors

use super::SpyceError;

/// Creates an invalid flavor error
pub fn invalid(flavor: impl Into<String>, message: impl Into<String>) -> SpyceError {
    SpyceError::FlavorInvalid {
        flavor: flavor.into(),
        message: message.into(),
    }
}

/// Creates a fetch failed error
pub fn fetch_failed(url: impl Into<String>, reason: impl ToString) -> SpyceError {
    SpyceError::FetchFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}
