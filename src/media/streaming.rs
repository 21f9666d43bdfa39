//! Media streaming for media-browser
//!
//! This module serves the bytes of files below the scan root. Request paths
//! are percent-decoded, confined to the root, and streamed without loading
//! the whole file into memory.

use crate::{
    config::MEDIA_CACHE_CONTROL,
    error::{Error, Result},
    utils::{mime_type_for_path, resolve_existing},
};
use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use log::{debug, error};
use std::path::Path;
use tokio_util::io::ReaderStream;

/// Streams the file that `request_path` names below `root`
///
/// # Arguments
/// * `root` - The configured scan root
/// * `request_path` - The raw, percent-encoded URI path of the request
///
/// # Returns
/// A 200 response with a streamed body, or an error mapping to 403 (path
/// escapes the root), 404 (missing or not a regular file) or 500 (file
/// could not be opened)
pub async fn stream_media(root: &Path, request_path: &str) -> Result<Response> {
    let relative = urlencoding::decode(request_path.trim_start_matches('/')).map_err(|err| {
        Error::MediaFileNotFound {
            path: request_path.to_string(),
            context: format!("invalid percent-encoding: {err}"),
        }
    })?;

    let file_path = resolve_existing(root, &relative)?;

    let metadata = tokio::fs::metadata(&file_path)
        .await
        .map_err(|err| Error::MediaFileNotFound {
            path: relative.to_string(),
            context: err.to_string(),
        })?;
    if !metadata.is_file() {
        return Err(Error::MediaFileNotFound {
            path: relative.to_string(),
            context: "not a regular file".to_string(),
        });
    }

    let file = tokio::fs::File::open(&file_path)
        .await
        .map_err(|source| Error::StreamFailed {
            path: file_path.display().to_string(),
            source,
        })?;

    debug!("Serving media file: {}", file_path.display());

    // Once headers are out an error can only abort the body, which drops
    // the connection instead of producing a truncated 200.
    let display_path = file_path.display().to_string();
    let stream = ReaderStream::new(file).inspect_err(move |err| {
        error!("Error while streaming {display_path}: {err}");
    });

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime_type_for_path(&file_path).to_string()),
            (header::CONTENT_LENGTH, metadata.len().to_string()),
            (header::CACHE_CONTROL, MEDIA_CACHE_CONTROL.to_string()),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}
