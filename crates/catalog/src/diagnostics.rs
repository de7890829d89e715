//! Selector decoding errors and the diagnostics recorded when the engine
//! recovers from them.
//!
//! The query path never fails on a bad selector: a malformed price range
//! degrades to "no filter" and an unknown sort key degrades to `featured`.
//! Each recovery is recorded here so callers (and tests) can tell a recovered
//! selector apart from an explicit `all`.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Strict selector decoding failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("malformed price range `{token}`: {reason}")]
    MalformedPriceRange { token: String, reason: &'static str },

    #[error("inverted price range `{token}`: min {min} exceeds max {max}")]
    InvertedPriceRange { token: String, min: u64, max: u64 },

    #[error("unknown sort key `{0}`")]
    UnknownSortKey(String),
}

/// A selector anomaly the engine recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The price selector did not parse; treated as no filter.
    MalformedPriceRange {
        token: String,
        #[serde(serialize_with = "serialize_display")]
        error: SelectorError,
    },
    /// The sort selector is not a known key; `featured` was used instead.
    UnknownSortKey { token: String },
}

fn serialize_display<S: Serializer>(error: &SelectorError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

/// Ordered list of recovered anomalies for one query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn has_malformed_price_range(&self) -> bool {
        self.iter()
            .any(|d| matches!(d, Diagnostic::MalformedPriceRange { .. }))
    }

    pub fn has_unknown_sort_key(&self) -> bool {
        self.iter()
            .any(|d| matches!(d, Diagnostic::UnknownSortKey { .. }))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
