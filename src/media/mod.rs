//! Media delivery for media-browser
//!
//! This module provides:
//! - Streaming of media files from the scan root over HTTP
//! - Handing files and folders to the operating system's opener

pub mod opener;
pub mod streaming;

pub use opener::{CommandOpener, OpenError, OsOpener};
pub use streaming::stream_media;
