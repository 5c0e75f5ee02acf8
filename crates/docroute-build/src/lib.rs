//! Build-time output emission for docroute.
//!
//! Bakes the redirect table into the site output as static redirect pages
//! and writes the framework manifest, so no redirect resolution happens at
//! request time on the production host.

mod builder;
mod template;

pub use builder::{BuildError, BuildReport, SiteBuilder};
