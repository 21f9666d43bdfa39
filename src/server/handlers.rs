//! Request handlers
//!
//! JSON endpoints live under `/api/`. Any other GET is a media request
//! resolved against the scan root.

use super::AppState;
use crate::{
    error::{Error, Result},
    media::{OpenError, stream_media},
    scanner::ScanNode,
    types::OpenTarget,
    utils::resolve_existing,
};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, Uri, header},
    response::{IntoResponse, Response},
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `GET /api/config`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub port: u16,
    pub scan_path: String,
}

/// Body of `GET /api/scan`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub base_dir: String,
    pub data: ScanNode,
}

/// Body of the open endpoints
#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// GET / and /index.html
pub async fn landing_page(State(state): State<AppState>) -> Result<Response> {
    let index_path = &state.config.index_path;
    let contents =
        tokio::fs::read(index_path)
            .await
            .map_err(|source| Error::LandingPageNotFound {
                path: index_path.display().to_string(),
                source,
            })?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], contents).into_response())
}

/// GET /api/config
pub async fn get_config(State(state): State<AppState>) -> Result<Json<ConfigResponse>> {
    let missing = state.config.missing_settings();
    if !missing.is_empty() {
        return Err(Error::MissingSettings { settings: missing });
    }

    Ok(Json(ConfigResponse {
        port: state.config.port,
        scan_path: state.scan_root()?.display().to_string(),
    }))
}

/// GET /api/scan
pub async fn scan(State(state): State<AppState>) -> Result<Json<ScanResponse>> {
    let root = state.scan_root()?.to_path_buf();
    let scanner = Arc::clone(&state.scanner);
    let scan_root = root.clone();
    let data = tokio::task::spawn_blocking(move || scanner.scan(&scan_root))
        .await
        .map_err(|source| Error::TaskFailed {
            source,
            context: format!("scanning {}", root.display()),
        })?;

    Ok(Json(ScanResponse {
        base_dir: root.display().to_string(),
        data,
    }))
}

/// POST /api/open-file
pub async fn open_file(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>> {
    open_path(&state, &body, OpenTarget::File).await
}

/// POST /api/open-folder
pub async fn open_folder(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>> {
    open_path(&state, &body, OpenTarget::Folder).await
}

async fn open_path(
    state: &AppState,
    body: &[u8],
    target: OpenTarget,
) -> Result<Json<SuccessResponse>> {
    let request: OpenRequest = serde_json::from_slice(body).map_err(|err| {
        warn!("Error parsing open-{target} request: {err}");
        Error::InvalidRequest {
            reason: err.to_string(),
        }
    })?;

    let full_path = match resolve_existing(state.scan_root()?, &request.path) {
        Err(Error::MediaFileNotFound { path, .. }) => {
            return Err(Error::OpenFailed {
                target,
                path,
                source: OpenError::Missing,
            });
        }
        resolved => resolved?,
    };

    let opener = Arc::clone(&state.opener);
    let open_target = full_path.clone();
    tokio::task::spawn_blocking(move || opener.open(target, &open_target))
        .await
        .map_err(|source| Error::TaskFailed {
            source,
            context: format!("opening {target}"),
        })?
        .map_err(|source| Error::OpenFailed {
            target,
            path: full_path.display().to_string(),
            source,
        })?;

    info!("Opened {target}: {}", full_path.display());
    Ok(Json(SuccessResponse { success: true }))
}

/// Everything no route matched: GETs outside `/api/` are media requests
pub async fn fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Result<Response> {
    let path = uri.path();
    if (method == Method::GET || method == Method::HEAD) && !path.starts_with("/api/") {
        return stream_media(state.scan_root()?, path).await;
    }

    Err(not_found(method, uri).await)
}

/// Unknown method and path combinations
pub async fn not_found(method: Method, uri: Uri) -> Error {
    Error::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
