//! Declarative site structure for docroute.
//!
//! This crate holds the data the external static-site framework consumes:
//! navigation and sidebar trees ([`NavEntry`]), site/theme/plugin options,
//! and the [`SiteManifest`] that bundles all of it (plus the redirect
//! table) into a single serializable object.
//!
//! Everything here is descriptive. The only enforced invariants are shape
//! checks at construction time (a group needs children, a leaf needs a
//! link); whether link targets actually exist is an external link
//! checker's responsibility.

mod manifest;
mod nav;
mod options;

pub use manifest::SiteManifest;
pub use nav::{NavChild, NavEntry, NavError, validate_nav_entries, validate_sidebar};
pub use options::{PluginOptions, SiteInfo, ThemeOptions};
