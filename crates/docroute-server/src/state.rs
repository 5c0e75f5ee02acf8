//! Application state.
//!
//! Shared state for all request handlers. Everything here is read-only
//! after construction.

use std::path::PathBuf;

use docroute_redirects::RedirectTable;
use docroute_site::SiteManifest;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Framework-facing configuration object.
    pub(crate) manifest: SiteManifest,
    /// Redirect table consulted before static-file resolution.
    pub(crate) redirects: RedirectTable,
    /// Built site directory.
    pub(crate) output_dir: PathBuf,
}
