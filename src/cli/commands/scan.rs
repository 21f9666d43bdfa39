//! Scan command implementation for media-browser
//!
//! This module implements the scan command which walks a directory once and
//! prints the same `{baseDir, data}` document `GET /api/scan` returns.

use crate::{
    config::Config,
    error::{Error, Result},
    scanner::Scanner,
    server::handlers::ScanResponse,
};
use std::path::PathBuf;

/// Scan command implementation
pub struct ScanCommand<'a> {
    args: &'a super::super::Scan,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command
    pub fn new(args: &'a super::super::Scan) -> Self {
        Self { args }
    }

    /// Execute the scan command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let root = self.root()?;
        let scanner = Scanner::from_config(config);

        let scan_root = root.clone();
        let data = tokio::task::spawn_blocking(move || scanner.scan(&scan_root))
            .await
            .map_err(|source| Error::TaskFailed {
                source,
                context: format!("scanning {}", root.display()),
            })?;

        let response = ScanResponse {
            base_dir: root.display().to_string(),
            data,
        };
        println!("{}", self.render(&response)?);
        Ok(())
    }

    fn root(&self) -> Result<PathBuf> {
        let root = self.args.path.clone().ok_or(Error::ScanPathNotConfigured)?;
        if !root.is_dir() {
            return Err(Error::ScanRootInvalid {
                path: root.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(root)
    }

    fn render(&self, response: &ScanResponse) -> Result<String> {
        let rendered = if self.args.pretty {
            serde_json::to_string_pretty(response)
        } else {
            serde_json::to_string(response)
        };
        rendered.map_err(|source| Error::OutputFailed { source })
    }
}
