//! URL redirect resolution for docroute.
//!
//! Provides [`RedirectTable`], an immutable mapping from legacy request
//! paths to canonical documentation paths. Lookups are exact string match
//! after trailing-slash normalization; anything that does not match is a
//! pass-through, never an error.
//!
//! # Normalization
//!
//! A trailing `/` is appended to paths that lack one, so `/cluster` and
//! `/cluster/` resolve identically. Sources are normalized once at
//! construction, request paths at every lookup. Destinations are returned
//! verbatim.
//!
//! # Single-hop semantics
//!
//! The table does not chase redirect chains. If a destination is itself
//! present as a source, the two entries are honored independently; callers
//! that want `A -> C` must configure it directly.
//!
//! # Thread safety
//!
//! The table is read-only after construction. [`RedirectTable::resolve`]
//! takes `&self` and can be called concurrently without synchronization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single source-to-destination redirect pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRule {
    /// Normalized source path (absolute, trailing slash).
    pub source: String,
    /// Destination path, returned verbatim on a match.
    pub destination: String,
}

/// Error returned by redirect table construction.
///
/// Lookups never fail; every variant here is a configuration error caught
/// before the table exists.
#[derive(Debug)]
pub enum RedirectError {
    /// Two entries map the same normalized source.
    DuplicateSource {
        /// The normalized source path that appeared twice.
        source: String,
    },
    /// A source or destination path does not start with `/`.
    NotAbsolute {
        /// The offending path as written in configuration.
        path: String,
    },
    /// A source maps to an empty destination.
    EmptyDestination {
        /// The source whose destination is missing.
        source: String,
    },
}

// Implemented by hand rather than derived with `thiserror`: the derive
// treats any field named `source` as the error's source, which `String`
// cannot be.
impl std::fmt::Display for RedirectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSource { source } => {
                write!(f, "Duplicate redirect source (after normalization): {source}")
            }
            Self::NotAbsolute { path } => {
                write!(f, "Redirect path must be absolute (leading '/'): {path:?}")
            }
            Self::EmptyDestination { source } => {
                write!(f, "Redirect destination for {source} is empty")
            }
        }
    }
}

impl std::error::Error for RedirectError {}

/// Immutable redirect table with exact-match lookups.
///
/// Rules are stored in insertion order with a `HashMap` index over the
/// normalized sources, so [`resolve`](Self::resolve) is O(1) and
/// [`rules`](Self::rules) iterates deterministically.
#[derive(Clone, Debug, Default)]
pub struct RedirectTable {
    rules: Vec<RedirectRule>,
    index: HashMap<String, usize>,
}

impl RedirectTable {
    /// Build a table from `(source, destination)` pairs.
    ///
    /// Sources are normalized before insertion. Construction rejects the
    /// whole table on the first invalid entry rather than silently picking
    /// one of two conflicting destinations.
    ///
    /// # Errors
    ///
    /// Returns [`RedirectError`] if a path is not absolute, a destination
    /// is empty, or two entries normalize to the same source.
    pub fn from_pairs<I, S, D>(pairs: I) -> Result<Self, RedirectError>
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        let mut rules = Vec::new();
        let mut index = HashMap::new();

        for (source, destination) in pairs {
            let source = source.into();
            let destination = destination.into();

            if !source.starts_with('/') {
                return Err(RedirectError::NotAbsolute { path: source });
            }
            if destination.is_empty() {
                return Err(RedirectError::EmptyDestination { source });
            }
            if !destination.starts_with('/') {
                return Err(RedirectError::NotAbsolute { path: destination });
            }

            let source = normalize(&source);
            if index.contains_key(&source) {
                return Err(RedirectError::DuplicateSource { source });
            }

            index.insert(source.clone(), rules.len());
            rules.push(RedirectRule {
                source,
                destination,
            });
        }

        Ok(Self { rules, index })
    }

    /// Resolve a request path against the table.
    ///
    /// Returns `Some(destination)` when the normalized path matches a
    /// configured source, `None` for pass-through (the caller proceeds with
    /// normal content resolution). Matching is exact: no prefix, wildcard,
    /// or query-string handling.
    #[must_use]
    pub fn resolve(&self, request_path: &str) -> Option<&str> {
        let normalized = normalize(request_path);
        self.index
            .get(&normalized)
            .map(|&i| self.rules[i].destination.as_str())
    }

    /// Configured rules in insertion order, sources normalized.
    #[must_use]
    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    /// Number of configured rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Append a trailing `/` if absent.
fn normalize(path: &str) -> String {
    if path.ends_with('/') {
        path.to_owned()
    } else {
        format!("{path}/")
    }
}
