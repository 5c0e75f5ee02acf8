//! Static file serving with request-time redirects.
//!
//! The fallback handler resolves every request path against the redirect
//! table first. A hit is answered with `301 Moved Permanently`; a miss
//! proceeds to static-file resolution in the built site directory. Unknown
//! paths are a plain 404, never an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Serve a request: redirect table first, then the output directory.
pub(crate) async fn serve_request(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
) -> Response {
    let path = req.uri().path();

    // Redirects win over content: exact match after normalization.
    if let Some(destination) = state.redirects.resolve(path) {
        tracing::debug!(path = %path, destination = %destination, "Redirecting");
        return (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, destination.to_owned())],
        )
            .into_response();
    }

    let Some(file_path) = resolve_file(&state.output_dir, path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_for(&file_path);
            ([(header::CONTENT_TYPE, mime)], content).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Map a URL path to a file in the output directory.
///
/// Directory-style paths get an `index.html` appended. Paths containing a
/// `..` component are rejected outright.
fn resolve_file(output_dir: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.trim_start_matches('/');
    if relative.split('/').any(|component| component == "..") {
        return None;
    }

    let mut file = output_dir.join(relative);
    if relative.is_empty() || url_path.ends_with('/') || file.is_dir() {
        file = file.join("index.html");
    }
    Some(file)
}

/// Content type by file extension.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use docroute_redirects::RedirectTable;
    use docroute_site::{PluginOptions, SiteInfo, SiteManifest, ThemeOptions};
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_state(output_dir: PathBuf) -> Arc<AppState> {
        let redirects = RedirectTable::from_pairs([
            ("/cluster", "/guide/go-redis-cluster.html"),
            ("/guide/cluster.html", "/guide/go-redis-cluster.html"),
        ])
        .unwrap();

        let manifest = SiteManifest::new(
            SiteInfo {
                hostname: "https://redis.uptrace.dev".to_owned(),
                ..Default::default()
            },
            ThemeOptions::default(),
            PluginOptions::default(),
            Vec::new(),
            BTreeMap::new(),
            redirects.rules().to_vec(),
        )
        .unwrap();

        Arc::new(AppState {
            manifest,
            redirects,
            output_dir,
        })
    }

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_redirect_hit_returns_301() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path().to_path_buf());

        let response = serve_request(State(state), request("/cluster")).await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/guide/go-redis-cluster.html"
        );
    }

    #[tokio::test]
    async fn test_redirect_trailing_slash_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path().to_path_buf());

        let response = serve_request(State(state), request("/cluster/")).await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    }

    #[tokio::test]
    async fn test_redirect_beats_existing_file() {
        // Request-time variant: the table wins even if a file exists.
        let dir = tempfile::tempdir().unwrap();
        let guide = dir.path().join("guide");
        std::fs::create_dir_all(&guide).unwrap();
        std::fs::write(guide.join("cluster.html"), "stale").unwrap();
        let state = test_state(dir.path().to_path_buf());

        let response = serve_request(State(state), request("/guide/cluster.html")).await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    }

    #[tokio::test]
    async fn test_static_file_served_on_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body {}").unwrap();
        let state = test_state(dir.path().to_path_buf());

        let response = serve_request(State(state), request("/style.css")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_directory_path_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        let guide = dir.path().join("guide");
        std::fs::create_dir_all(&guide).unwrap();
        std::fs::write(guide.join("index.html"), "<html></html>").unwrap();
        let state = test_state(dir.path().to_path_buf());

        let response = serve_request(State(state), request("/guide/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path().to_path_buf());

        let response = serve_request(State(state), request("/unknown-page")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_resolve_file_rejects_traversal() {
        assert!(resolve_file(Path::new("/out"), "/../etc/passwd").is_none());
        assert!(resolve_file(Path::new("/out"), "/guide/../../etc/passwd").is_none());
    }

    #[test]
    fn test_resolve_file_root_is_index() {
        assert_eq!(
            resolve_file(Path::new("/out"), "/"),
            Some(PathBuf::from("/out/index.html"))
        );
    }

    #[test]
    fn test_mime_for_common_types() {
        assert_eq!(mime_for(Path::new("a.html")), "text/html; charset=utf-8");
        assert_eq!(mime_for(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(mime_for(Path::new("a.bin")), "application/octet-stream");
    }
}
