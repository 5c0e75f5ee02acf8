//! HTTP request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use docroute_site::SiteManifest;

use crate::state::AppState;

/// Handle GET /api/manifest.
///
/// Returns the same configuration object the build writes as
/// `manifest.json`, so the external framework can consume it from a
/// running preview without a build.
pub(crate) async fn get_manifest(State(state): State<Arc<AppState>>) -> Json<SiteManifest> {
    Json(state.manifest.clone())
}
