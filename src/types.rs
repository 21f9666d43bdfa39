//! Types used in media-browser

use crate::config::{
    SUPPORTED_AUDIO_EXTENSIONS, SUPPORTED_IMAGE_EXTENSIONS, SUPPORTED_VIDEO_EXTENSIONS,
};
use serde::Serialize;

/// Kind of media a file holds, derived solely from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still images
    Image,
    /// Video files
    Video,
    /// Audio files
    Audio,
}

impl MediaKind {
    /// Returns the lowercase extensions recognized for this kind
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => SUPPORTED_IMAGE_EXTENSIONS,
            MediaKind::Video => SUPPORTED_VIDEO_EXTENSIONS,
            MediaKind::Audio => SUPPORTED_AUDIO_EXTENSIONS,
        }
    }

    /// Returns the kind owning a lowercase extension
    pub fn from_extension(extension: &str) -> Option<MediaKind> {
        MediaKind::all()
            .into_iter()
            .find(|kind| kind.extensions().contains(&extension))
    }

    /// Returns all media kinds in lookup order
    pub fn all() -> [MediaKind; 3] {
        [MediaKind::Image, MediaKind::Video, MediaKind::Audio]
    }

    /// Returns the wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an open request asks the operating system to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// Open a file with its default application
    File,
    /// Reveal a folder in the native file manager
    Folder,
}

impl std::fmt::Display for OpenTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OpenTarget::File => f.write_str("file"),
            OpenTarget::Folder => f.write_str("folder"),
        }
    }
}
