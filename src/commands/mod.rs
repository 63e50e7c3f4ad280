//! Command implementations for the spyce CLI

pub mod add;
pub mod completions;
pub mod del;
pub mod get;
pub mod list;
pub mod version;
pub mod wok;
