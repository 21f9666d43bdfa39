//! CLI command implementations for media-browser
//!
//! This module contains the implementation of CLI commands including
//! serve and scan functionality.

mod scan;
mod serve;

pub use scan::ScanCommand;
pub use serve::ServeCommand;

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(super::Serve),

    /// Scan a directory once and print the tree as JSON
    Scan(super::Scan),
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = match self {
            Self::Serve(serve) => cli.build_config(Some(serve)),
            Self::Scan(_) => cli.build_config(None),
        };
        self.setup_log(&config);
        match self {
            Self::Serve(serve) => ServeCommand::new(serve).run(config).await?,
            Self::Scan(scan) => ScanCommand::new(scan).run(&config).await?,
        }
        Ok(())
    }

    /// Setup logging configuration
    ///
    /// `MEDIA_BROWSER_LOG` wins over `--log-level`.
    fn setup_log(&self, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = env::var(LOG_LEVEL_ENV_VAR)
            .ok()
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(config.log_level);

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
