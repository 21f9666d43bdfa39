use crate::{
    config::{INVALID_REQUEST_MSG, NOT_FOUND_MSG},
    media::OpenError,
    types::OpenTarget,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;
use std::fmt;

/// Errors that can happen inside media-browser
#[derive(Debug)]
pub enum Error {
    // Configuration errors
    /// No scan root was configured
    ScanPathNotConfigured,
    /// One or more required settings are absent
    MissingSettings {
        /// Names of the absent settings
        settings: Vec<&'static str>,
    },
    /// The configured scan root cannot be scanned
    ScanRootInvalid {
        /// The configured root
        path: String,
        /// Why it cannot be used
        reason: String,
    },

    // Client input errors
    /// Request body is not valid JSON or lacks a required field
    InvalidRequest {
        /// What was wrong with the body
        reason: String,
    },
    /// A requested path would resolve outside the scan root
    PathOutsideRoot {
        /// The path as requested by the client
        path: String,
    },
    /// Media file does not exist or is not accessible
    MediaFileNotFound {
        /// Path to the missing file
        path: String,
        /// Additional context about the file access attempt
        context: String,
    },
    /// The landing page document could not be read
    LandingPageNotFound {
        /// Configured location of the document
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// No handler matches the method and path
    RouteNotFound {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },

    // Runtime errors
    /// The operating system refused to open a path
    OpenFailed {
        /// Whether a file or a folder was requested
        target: OpenTarget,
        /// Absolute path handed to the opener
        path: String,
        /// The underlying opener error
        source: OpenError,
    },
    /// Reading a media file failed before any bytes were sent
    StreamFailed {
        /// Path of the file being streamed
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// A blocking task did not run to completion
    TaskFailed {
        /// The underlying task join error
        source: tokio::task::JoinError,
        /// Additional context about the task
        context: String,
    },

    /// A scan result could not be rendered as JSON
    OutputFailed {
        /// The underlying serialization error
        source: serde_json::Error,
    },

    // Startup errors
    /// The HTTP server could not start or stopped with an error
    ServerError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Additional context about the failure
        context: String,
    },
}

impl Error {
    /// HTTP status reported to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Error::PathOutsideRoot { .. } => StatusCode::FORBIDDEN,
            Error::MediaFileNotFound { .. }
            | Error::LandingPageNotFound { .. }
            | Error::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body
    ///
    /// Filesystem locations and OS error details stay in the server log.
    pub fn client_message(&self) -> String {
        match self {
            Error::InvalidRequest { .. } => INVALID_REQUEST_MSG.to_string(),
            Error::RouteNotFound { .. } | Error::LandingPageNotFound { .. } => {
                NOT_FOUND_MSG.to_string()
            }
            Error::MediaFileNotFound { .. } => "File not found".to_string(),
            Error::PathOutsideRoot { .. } => "Path is outside the scan root".to_string(),
            Error::OpenFailed { target, .. } => format!("Failed to open {target}"),
            Error::StreamFailed { .. } => "Internal server error".to_string(),
            Error::TaskFailed { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ScanPathNotConfigured => {
                write!(f, "SCAN_PATH environment variable is not set")
            }
            Error::MissingSettings { settings } => {
                write!(
                    f,
                    "Missing required environment variables: {}",
                    settings.join(" and/or ")
                )
            }
            Error::ScanRootInvalid { path, reason } => {
                write!(f, "Cannot scan '{path}': {reason}")
            }
            Error::InvalidRequest { reason } => {
                write!(f, "{INVALID_REQUEST_MSG}: {reason}")
            }
            Error::PathOutsideRoot { path } => {
                write!(f, "Path '{path}' resolves outside the scan root")
            }
            Error::MediaFileNotFound { path, context } => {
                write!(f, "Media file '{path}' not found: {context}")
            }
            Error::LandingPageNotFound { path, source } => {
                write!(f, "Landing page '{path}' could not be read: {source}")
            }
            Error::RouteNotFound { method, path } => {
                write!(f, "No route for {method} {path}")
            }
            Error::OpenFailed {
                target,
                path,
                source,
            } => {
                write!(f, "Failed to open {target} '{path}': {source}")
            }
            Error::StreamFailed { path, source } => {
                write!(f, "Failed to stream '{path}': {source}")
            }
            Error::TaskFailed { source, context } => {
                write!(f, "Background task failed: {source} ({context})")
            }
            Error::OutputFailed { source } => {
                write!(f, "Failed to render scan result: {source}")
            }
            Error::ServerError { source, context } => {
                write!(f, "Server error: {source} ({context})")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::LandingPageNotFound { source, .. } => Some(source),
            Error::OpenFailed { source, .. } => Some(source),
            Error::StreamFailed { source, .. } => Some(source),
            Error::TaskFailed { source, .. } => Some(source),
            Error::OutputFailed { source } => Some(source),
            Error::ServerError { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self}");
        }

        let body = ErrorResponse {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
