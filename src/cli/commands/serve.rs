//! Serve command implementation for media-browser
//!
//! This module implements the serve command which runs the HTTP server
//! until interrupted.

use crate::{config::Config, error::Result, server};
use log::info;

/// Serve command implementation
pub struct ServeCommand<'a> {
    args: &'a super::super::Serve,
}

impl<'a> ServeCommand<'a> {
    /// Create a new serve command
    pub fn new(args: &'a super::super::Serve) -> Self {
        Self { args }
    }

    /// The `host:port` pair requested on the command line
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.args.host, self.args.port)
    }

    /// Execute the serve command
    pub async fn run(&self, config: Config) -> Result<()> {
        info!(
            "Starting server on {} (max depth {}, ignoring {:?})",
            self.listen_address(),
            config.max_depth,
            config.ignored_dirs
        );
        info!("Landing page: {}", self.args.index_path.display());
        server::serve(config).await
    }
}
