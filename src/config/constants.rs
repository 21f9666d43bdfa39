//! Configuration constants for media-browser
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality.

// =============================================================================
// Server Constants
// =============================================================================

/// Default address the HTTP server binds to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default location of the landing page document
pub const DEFAULT_INDEX_PATH: &str = "index.html";

/// Server header value
pub const USER_AGENT: &str = concat!("media-browser/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Scanner Constants
// =============================================================================

/// Default number of directory levels below the root that are expanded
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Directory names skipped at every level of a scan
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules"];

// =============================================================================
// Media File Support Constants
// =============================================================================

/// Supported image file extensions
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp"];

/// Supported video file extensions
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Supported audio file extensions
pub const SUPPORTED_AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a"];

/// MIME type used when an extension is not in the table
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Cache policy attached to streamed media
pub const MEDIA_CACHE_CONTROL: &str = "public, max-age=3600";

// =============================================================================
// CORS Constants
// =============================================================================

/// Value of `Access-Control-Allow-Origin`
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Methods`
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// Value of `Access-Control-Allow-Headers`
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "MEDIA_BROWSER_LOG";

/// Environment variable holding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Environment variable holding the scan root
pub const SCAN_PATH_ENV_VAR: &str = "SCAN_PATH";

// =============================================================================
// Error and Status Messages
// =============================================================================

/// Body message for unknown routes
pub const NOT_FOUND_MSG: &str = "Not found";

/// Body message for malformed open requests
pub const INVALID_REQUEST_MSG: &str = "Invalid request";
