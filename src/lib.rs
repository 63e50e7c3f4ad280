//! Spyce - named data sections embedded in source files
//!
//! A spyce is a tagged block of text or base64-encoded bytes stored inside comment markers
//! of a source file, so that a program can carry its own resources. This crate parses such
//! files ([`curry::Curry`]), edits and writes them back, builds them from YAML project files
//! ([`wok`]), and lets programs look up their own embedded data ([`lookup`]).

pub mod curry;
pub mod demo;
pub mod error;
pub mod filter;
pub mod flavor;
pub mod format;
pub mod logging;
pub mod lookup;
pub mod resource;
pub mod temp;
pub mod wok;

pub use error::{Result, SpyceError};
