//! Key filters for selecting spyces
//!
//! A filter is written `[~][section/][name][:type]` and matched as a glob against fully
//! qualified keys (`section/name:type`). Missing parts match anything; a leading `~`
//! negates the filter. Filters apply in sequence, each narrowing the previous result.

use std::str::FromStr;

use wax::{Glob, Pattern};

use crate::curry::Curry;
use crate::error::{Result, SpyceError};
use crate::format::SpyceKey;

/// Characters wax reads as syntax that a filter takes literally
const LITERAL_META: &[char] = &['$', ':', '<', '>', '(', ')', '{', '}', ','];

/// One parsed filter
#[derive(Debug, Clone)]
pub struct Filter {
    expression: String,
    glob: Glob<'static>,
    negated: bool,
}

impl Filter {
    pub fn parse(value: &str) -> Result<Self> {
        let (negated, value) = match value.strip_prefix('~') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (section, rest) = value.split_once('/').unwrap_or(("", value));
        let (name, spyce_type) = rest.split_once(':').unwrap_or((rest, ""));
        let expression = format!(
            "{}/{}\\:{}",
            glob_part(section),
            glob_part(name),
            glob_part(spyce_type)
        );
        let glob = Glob::new(&expression)
            .map(Glob::into_owned)
            .map_err(|e| SpyceError::InvalidFilter {
                pattern: value.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            expression,
            glob,
            negated,
        })
    }

    /// Glob matched against fully qualified keys
    pub fn glob(&self) -> &str {
        &self.expression
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether a fully qualified key passes this filter
    pub fn accepts(&self, fq_key: &str) -> bool {
        self.glob.is_match(fq_key) != self.negated
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression && self.negated == other.negated
    }
}

impl Eq for Filter {}

impl FromStr for Filter {
    type Err = SpyceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Glob text for one part of a filter
///
/// `*`, `?` and `[...]` keep their fnmatch meaning; other wax syntax is escaped outside of
/// classes. Runs of `*` collapse to one, since wax only allows `**` as a whole component.
fn glob_part(part: &str) -> String {
    if part.is_empty() {
        return "*".to_string();
    }
    let mut out = String::with_capacity(part.len());
    let mut in_class = false;
    for c in part.chars() {
        match c {
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '*' if !in_class && out.ends_with('*') && !out.ends_with("\\*") => continue,
            c if !in_class && LITERAL_META.contains(&c) => out.push('\\'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Keys of the blocks in `curry` passing every filter, in file order
pub fn filtered_keys(curry: &Curry, filters: &[Filter]) -> Vec<SpyceKey> {
    curry
        .items()
        .iter()
        .filter(|item| {
            let fq_key = item.fq_key();
            filters.iter().all(|filter| filter.accepts(&fq_key))
        })
        .map(|item| item.key().clone())
        .collect()
}
