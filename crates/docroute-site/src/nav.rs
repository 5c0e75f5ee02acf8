//! Navigation and sidebar trees.
//!
//! A [`NavEntry`] is a node in the navbar or a sidebar group. Children are
//! either nested entries or bare page-link strings, matching the shorthand
//! the frontend theme accepts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in a navigation or sidebar tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display text.
    pub text: String,

    /// Link target path. Absolute site paths or external URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Child entries, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavChild>,

    /// Marks a sidebar group heading (collapsible, no own link).
    #[serde(
        default,
        rename(serialize = "isGroup"),
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_group: bool,
}

/// A child of a [`NavEntry`]: either a bare page link or a nested entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavChild {
    /// Page link shorthand, e.g. `"/guide/README.md"`.
    Link(String),
    /// Nested entry with its own text and children.
    Entry(NavEntry),
}

/// Error type for navigation shape validation.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// An entry has no display text.
    #[error("Navigation entry has empty text")]
    EmptyText,
    /// A group entry has no children.
    #[error("Navigation group {text:?} has no children")]
    GroupWithoutChildren {
        /// Display text of the offending group.
        text: String,
    },
    /// A non-group entry has neither a link nor children.
    #[error("Navigation entry {text:?} has neither link nor children")]
    LeafWithoutLink {
        /// Display text of the offending entry.
        text: String,
    },
    /// A bare link child is an empty string.
    #[error("Navigation entry {parent:?} contains an empty link")]
    EmptyLink {
        /// Display text of the entry holding the empty link.
        parent: String,
    },
    /// The site hostname is not an absolute http(s) URL.
    #[error("Site hostname must start with http:// or https://: {value:?}")]
    InvalidHostname {
        /// The hostname as configured.
        value: String,
    },
}

/// Validate a list of navigation entries recursively.
///
/// # Errors
///
/// Returns the first [`NavError`] encountered in display order.
pub fn validate_nav_entries(entries: &[NavEntry]) -> Result<(), NavError> {
    for entry in entries {
        validate_entry(entry)?;
    }
    Ok(())
}

/// Validate every entry list of a sidebar mapping.
///
/// # Errors
///
/// Returns the first [`NavError`] encountered, iterating prefixes in key
/// order.
pub fn validate_sidebar(sidebar: &BTreeMap<String, Vec<NavEntry>>) -> Result<(), NavError> {
    for entries in sidebar.values() {
        validate_nav_entries(entries)?;
    }
    Ok(())
}

fn validate_entry(entry: &NavEntry) -> Result<(), NavError> {
    if entry.text.is_empty() {
        return Err(NavError::EmptyText);
    }
    if entry.is_group && entry.children.is_empty() {
        return Err(NavError::GroupWithoutChildren {
            text: entry.text.clone(),
        });
    }
    if !entry.is_group && entry.link.is_none() && entry.children.is_empty() {
        return Err(NavError::LeafWithoutLink {
            text: entry.text.clone(),
        });
    }

    for child in &entry.children {
        match child {
            NavChild::Link(link) if link.is_empty() => {
                return Err(NavError::EmptyLink {
                    parent: entry.text.clone(),
                });
            }
            NavChild::Link(_) => {}
            NavChild::Entry(nested) => validate_entry(nested)?,
        }
    }

    Ok(())
}
