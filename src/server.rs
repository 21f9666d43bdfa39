//! HTTP server for media-browser
//!
//! Builds the axum router, attaches the CORS headers every response carries,
//! and runs the listener until Ctrl-C.

pub mod handlers;

use crate::{
    config::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN, Config, USER_AGENT},
    error::{Error, Result},
    media::{CommandOpener, OsOpener},
    scanner::Scanner,
};
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::{HeaderValue, Method, StatusCode, header};
use log::{info, warn};
use std::{path::Path, sync::Arc};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// State shared by every request handler
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration
    pub config: Arc<Config>,
    /// Scanner built from the configuration
    pub scanner: Arc<Scanner>,
    /// Platform opener used by the open endpoints
    pub opener: Arc<dyn OsOpener>,
}

impl AppState {
    /// Creates state with the opener of the current platform
    pub fn new(config: Config) -> Self {
        Self::with_opener(config, Arc::new(CommandOpener::for_platform()))
    }

    /// Creates state with an explicit opener
    pub fn with_opener(config: Config, opener: Arc<dyn OsOpener>) -> Self {
        Self {
            scanner: Arc::new(Scanner::from_config(&config)),
            config: Arc::new(config),
            opener,
        }
    }

    /// The configured scan root
    pub fn scan_root(&self) -> Result<&Path> {
        self.config
            .scan_path
            .as_deref()
            .ok_or(Error::ScanPathNotConfigured)
    }
}

/// Builds the application router
///
/// The header layers sit outside the preflight shortcut so the empty
/// OPTIONS response carries the CORS headers as well.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing_page))
        .route("/index.html", get(handlers::landing_page))
        .route("/api/config", get(handlers::get_config))
        .route("/api/scan", get(handlers::scan))
        .route("/api/open-file", post(handlers::open_file))
        .route("/api/open-folder", post(handlers::open_folder))
        .fallback(handlers::fallback)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::SERVER,
                    HeaderValue::from_static(USER_AGENT),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static(CORS_ALLOW_ORIGIN),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(CORS_ALLOW_METHODS),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static(CORS_ALLOW_HEADERS),
                ))
                .layer(middleware::from_fn(preflight)),
        )
        .with_state(state)
}

/// Answers every OPTIONS request with an empty 200, whatever the path
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// Binds `host:port` and serves until Ctrl-C
pub async fn serve(config: Config) -> Result<()> {
    let host = config.host.clone();
    let port = config.port;

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|source| Error::ServerError {
            source,
            context: format!("failed to bind {host}:{port}"),
        })?;
    let address = listener.local_addr().map_err(|source| Error::ServerError {
        source,
        context: "failed to read listener address".to_string(),
    })?;

    match &config.scan_path {
        Some(scan_path) => info!("Scan root: {}", scan_path.display()),
        None => warn!("SCAN_PATH is not set, media endpoints will answer 500"),
    }

    let app = router(AppState::new(config));

    info!("Media browser server running at http://{address}");
    info!("API endpoint: http://{address}/api/scan");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| Error::ServerError {
            source,
            context: "server stopped unexpectedly".to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
