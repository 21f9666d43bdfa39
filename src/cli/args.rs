//! CLI argument parsing for media-browser
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate. Every setting can also come from the environment
//! (or a `.env` file loaded before parsing).

use crate::config::{
    Config, DEFAULT_HOST, DEFAULT_IGNORED_DIRS, DEFAULT_INDEX_PATH, DEFAULT_MAX_DEPTH,
};
use clap::{Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// A local media browsing server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Directory levels below the root that are expanded
    #[arg(long, env = "MAX_DEPTH", global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Directory names skipped at every level (comma separated or repeated)
    #[arg(
        long = "ignore",
        value_name = "NAME",
        env = "IGNORE_DIRS",
        global = true,
        value_delimiter = ',',
        default_values = DEFAULT_IGNORED_DIRS
    )]
    pub ignored_dirs: Vec<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments and the Serve command
    pub fn build_config(&self, serve_cmd: Option<&Serve>) -> Config {
        let mut config = Config::new()
            .with_max_depth(self.max_depth)
            .with_ignored_dirs(self.ignored_dirs.iter().cloned())
            .with_log_level(self.log_level);

        if let Some(serve) = serve_cmd {
            config = config
                .with_host(serve.host.clone())
                .with_port(serve.port)
                .with_scan_path(serve.scan_path.clone())
                .with_index_path(serve.index_path.clone());
        }

        config
    }
}

/// Serve command arguments
#[derive(Args)]
pub struct Serve {
    /// The port the server listens on
    #[arg(
        short = 'P',
        long,
        env = "PORT",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// The address the server binds to
    #[arg(short = 'H', long, env = "BIND_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// The root directory to scan and serve
    #[arg(short, long, env = "SCAN_PATH")]
    pub scan_path: Option<PathBuf>,

    /// The landing page served at `/`
    #[arg(long = "index", value_name = "FILE", env = "INDEX_PATH", default_value = DEFAULT_INDEX_PATH)]
    pub index_path: PathBuf,
}

/// Scan command arguments
#[derive(Args)]
pub struct Scan {
    /// The directory to scan
    #[arg(env = "SCAN_PATH")]
    pub path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
