//! Static site output builder.
//!
//! Walks the redirect table once and emits one redirect page per entry
//! into the build output directory, plus `manifest.json` for the external
//! framework. Each lookup is independent and the table is read-only, so
//! order does not matter; entries are processed in table order for
//! deterministic logs.

use std::path::{Path, PathBuf};

use docroute_site::SiteManifest;

use crate::template::render_redirect_page;

/// Manifest output filename.
const MANIFEST_FILENAME: &str = "manifest.json";

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// I/O failure, annotated with the path involved.
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        /// Path being written or created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Manifest serialization failure.
    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Summary of emitted build artifacts.
#[derive(Debug)]
pub struct BuildReport {
    /// Redirect pages written.
    pub redirect_pages: usize,
    /// Redirect pages skipped because real content already occupies the
    /// source path.
    pub skipped: usize,
    /// Path of the written manifest.
    pub manifest_path: PathBuf,
}

/// Emits redirect pages and the framework manifest into the output tree.
pub struct SiteBuilder {
    manifest: SiteManifest,
}

impl SiteBuilder {
    /// Create a builder for the given manifest.
    #[must_use]
    pub fn new(manifest: SiteManifest) -> Self {
        Self { manifest }
    }

    /// Write `manifest.json` and all redirect pages into `output_dir`.
    ///
    /// A redirect source that already exists as a real file in the output
    /// tree is left untouched (warned, counted as skipped) — the build
    /// never overwrites generated content with a redirect page.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] on serialization or filesystem failure.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        create_dir_all(output_dir)?;

        let manifest_path = output_dir.join(MANIFEST_FILENAME);
        let json = self.manifest.to_json_pretty()?;
        write_file(&manifest_path, json.as_bytes())?;

        let mut redirect_pages = 0;
        let mut skipped = 0;

        for rule in &self.manifest.redirects {
            let target = redirect_page_path(output_dir, &rule.source);

            if target.exists() {
                tracing::warn!(
                    source = %rule.source,
                    target = %target.display(),
                    "Redirect source collides with existing content, skipping"
                );
                skipped += 1;
                continue;
            }

            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }

            let canonical = self.manifest.site.canonical_url(&rule.destination);
            let page = render_redirect_page(&rule.destination, canonical.as_deref());
            write_file(&target, page.as_bytes())?;

            tracing::debug!(source = %rule.source, destination = %rule.destination, "Wrote redirect page");
            redirect_pages += 1;
        }

        Ok(BuildReport {
            redirect_pages,
            skipped,
            manifest_path,
        })
    }
}

/// Map a normalized redirect source to its output file path.
///
/// Sources naming an `.html` file map to that file directly; directory
/// style sources get an `index.html` inside them.
fn redirect_page_path(output_dir: &Path, source: &str) -> PathBuf {
    let trimmed = source.trim_matches('/');
    if trimmed.ends_with(".html") {
        output_dir.join(trimmed)
    } else if trimmed.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(trimmed).join("index.html")
    }
}

fn create_dir_all(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), BuildError> {
    std::fs::write(path, content).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
