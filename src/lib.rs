//! A local media browsing server
//!
//! Given a root directory, media-browser recursively enumerates its image,
//! video and audio files up to a bounded depth, serves the resulting tree as
//! JSON, streams the files themselves to a browser, and can ask the
//! operating system to open a file or reveal a folder.
//!
//! The pieces, leaf first:
//! - [`utils::classify`] maps a file name to a [`MediaKind`]
//! - [`Scanner`] builds the [`ScanNode`] tree
//! - [`media::stream_media`] serves file bytes confined to the root
//! - [`media::OsOpener`] hands paths to the platform's opener
//! - [`server::router`] dispatches HTTP requests to all of the above

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod scanner;
pub mod server;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use media::{CommandOpener, OpenError, OsOpener, stream_media};
pub use scanner::{FolderEntry, MediaFile, ScanNode, Scanner};
pub use server::{AppState, router, serve};
pub use types::{MediaKind, OpenTarget};
pub use utils::classify;
