//! Utility functions and helpers for media-browser
//!
//! - Media file classification and content types
//! - Path resolution confined to the scan root

pub mod media;
pub mod path;

pub use media::{classify, mime_type_for_path};
pub use path::{join_relative, relative_slash_path, resolve_existing};
