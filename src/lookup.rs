//! Runtime lookup of embedded resources
//!
//! [`ResourceLookup`] is the boundary consumed by programs that read their own spyces.
//! [`Curry`] implements it; tests substitute their own implementations.

use crate::curry::Curry;
use crate::error::Result;
use crate::format::{CommentStyle, SpyceKey};
use crate::resource::Spyce;

/// Resolution of named resources
pub trait ResourceLookup {
    /// Whether the key is known
    fn is_defined(&self, key: &str) -> bool;

    /// Whether the key has a value
    fn is_set(&self, key: &str) -> bool;

    /// Fetch the resource handle for a key
    fn get(&self, key: &str) -> Result<Spyce>;
}

impl ResourceLookup for Curry {
    fn is_defined(&self, key: &str) -> bool {
        SpyceKey::parse(key).is_ok_and(|key| self.contains(&key))
    }

    fn is_set(&self, key: &str) -> bool {
        SpyceKey::parse(key)
            .ok()
            .and_then(|key| self.item(&key).map(|item| item.is_closed()))
            .unwrap_or(false)
    }

    fn get(&self, key: &str) -> Result<Spyce> {
        Curry::get(self, &SpyceKey::parse(key)?)
    }
}

/// Lookup over a program's own source text
///
/// Typically fed with `include_str!` of the file holding the spyces.
pub fn embedded(source: &str, style: CommentStyle, filename: &str) -> Result<Curry> {
    Curry::parse(source, style, filename)
}

/// Fetch one spyce from a file on disk
pub fn get_spyce(path: &std::path::Path, key: &str) -> Result<Spyce> {
    let key = SpyceKey::parse(key)?;
    Curry::open(path)?.get(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpyceError;

    const TEXT: &str = "\
// spyce: start data/xy
//|aGk=
// spyce: end data/xy
// spyce: start data/pending
";

    fn curry() -> Curry {
        embedded(TEXT, CommentStyle::Slash, "demo.rs").unwrap()
    }

    #[test]
    fn test_defined_and_set() {
        let curry = curry();
        assert!(curry.is_defined("xy"));
        assert!(curry.is_set("data/xy"));
        assert!(curry.is_defined("pending"));
        assert!(!curry.is_set("pending"));
        assert!(!curry.is_defined("missing"));
        assert!(!curry.is_set("missing"));
        assert!(!curry.is_defined("bad key"));
    }

    #[test]
    fn test_get_through_trait_object() {
        let curry = curry();
        let lookup: &dyn ResourceLookup = &curry;
        assert_eq!(lookup.get("xy").unwrap().as_bytes(), b"hi");
        assert!(lookup.get("pending").is_err());
        assert!(lookup.get("missing").is_err());
    }

    #[test]
    fn test_get_spyce_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tool.rs");
        std::fs::write(&path, TEXT).unwrap();
        assert_eq!(get_spyce(&path, "xy").unwrap().name(), "xy");
        assert!(matches!(
            get_spyce(&path, "nope").unwrap_err(),
            SpyceError::SpyceNotFound { .. }
        ));
    }
}
