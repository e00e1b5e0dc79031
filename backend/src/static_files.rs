//! Serving of the built front-end with a single-page-application fallback.
//!
//! A request path that names a regular file under the public root gets that
//! file; everything else gets the index document so client-side routes like
//! `/dashboard/settings` load the app shell.

use axum::{
    extract::{OriginalUri, Request, State},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::AppError;
use crate::web_server::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// An existing regular file inside the public root.
    Asset(PathBuf),
    /// Nothing servable at that path; answer with the index document.
    Fallback,
}

/// Maps a raw request path onto the public root.
///
/// Only plain segments are accepted. Anything carrying `..`, a root or a
/// drive prefix after percent-decoding never touches the filesystem.
pub async fn resolve(root: &Path, request_path: &str) -> Result<Resolved, AppError> {
    let Ok(decoded) = urlencoding::decode(request_path) else {
        tracing::debug!("Undecodable request path: {}", request_path);
        return Ok(Resolved::Fallback);
    };

    let relative = Path::new(decoded.trim_start_matches('/'));
    if relative.as_os_str().is_empty() {
        return Ok(Resolved::Fallback);
    }

    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        tracing::warn!("Path traversal attempt blocked: {}", request_path);
        return Ok(Resolved::Fallback);
    }

    let candidate = root.join(relative);
    match fs::metadata(&candidate).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Ok(Resolved::Fallback),
    }

    // Symlinks inside the root may still point outside of it.
    let canonical_root = fs::canonicalize(root).await?;
    let Ok(canonical_candidate) = fs::canonicalize(&candidate).await else {
        return Ok(Resolved::Fallback);
    };
    if !canonical_candidate.starts_with(&canonical_root) {
        tracing::warn!(
            "Static file escapes the public root: {} -> {}",
            request_path,
            canonical_candidate.display()
        );
        return Ok(Resolved::Fallback);
    }

    Ok(Resolved::Asset(candidate))
}

/// `GET /`: always the index document.
pub async fn serve_index(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let index = index_document(&state.app_config.static_files.index_path()).await?;
    Ok(serve_file(index, request).await)
}

/// Catch-all for paths no API route claimed.
///
/// Resolves against the original request path, so requests handed over from
/// under the `/api` nest are looked up as `public/api/...`.
pub async fn serve(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    request: Request,
) -> Result<Response, AppError> {
    let static_config = &state.app_config.static_files;

    let path = match resolve(&static_config.public_dir, uri.path()).await? {
        Resolved::Asset(path) => {
            tracing::debug!("Serving static file: {}", path.display());
            path
        }
        Resolved::Fallback => {
            tracing::debug!("No static file for {}, serving app shell", uri.path());
            index_document(&static_config.index_path()).await?
        }
    };

    Ok(serve_file(path, request).await)
}

// The app shell has to exist; without it there is nothing sensible to send.
async fn index_document(path: &Path) -> Result<PathBuf, AppError> {
    let metadata = fs::metadata(path).await.map_err(|e| {
        tracing::error!("Index document {} unreadable: {}", path.display(), e);
        AppError::Io(e)
    })?;
    if !metadata.is_file() {
        return Err(AppError::Internal(format!(
            "Index document {} is not a file",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

// `ServeFile` picks the content type from the extension and turns read
// failures into 5xx responses itself.
async fn serve_file(path: PathBuf, request: Request) -> Response {
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
