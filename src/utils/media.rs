//! Media file utilities for media-browser
//!
//! This module provides functions for classifying files by extension and
//! choosing the content type they are served with.

use crate::{config::FALLBACK_MIME_TYPE, types::MediaKind};
use std::path::Path;

/// Lowercased extension of a file name: the text after the last `.`
///
/// A leading dot alone (`.profile`) does not start an extension.
fn lowercase_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Classifies a file name as image, video or audio
///
/// # Arguments
/// * `file_name` - Base name of the file
///
/// # Returns
/// Returns the media kind, or None when the extension is not recognized
pub fn classify(file_name: &str) -> Option<MediaKind> {
    lowercase_extension(file_name).and_then(|ext| MediaKind::from_extension(&ext))
}

/// Gets MIME type from file path extension
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let Some(ext) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(lowercase_extension)
    else {
        return FALLBACK_MIME_TYPE;
    };

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        _ => FALLBACK_MIME_TYPE,
    }
}
