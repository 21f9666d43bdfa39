//! Configuration types for media-browser
//!
//! This module contains the immutable configuration loaded once at startup
//! and shared by the router and the scanner.

use log::LevelFilter;
use std::path::PathBuf;

use super::constants::*;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Root directory that is scanned and served, if configured
    pub scan_path: Option<PathBuf>,
    /// Location of the landing page document
    pub index_path: PathBuf,
    /// Number of directory levels below the root that are expanded
    pub max_depth: usize,
    /// Directory names skipped at every level
    pub ignored_dirs: Vec<String>,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 0,
            scan_path: None,
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            max_depth: DEFAULT_MAX_DEPTH,
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bind host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the listening port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the scan root
    pub fn with_scan_path(mut self, scan_path: Option<PathBuf>) -> Self {
        self.scan_path = scan_path;
        self
    }

    /// Sets the landing page location
    pub fn with_index_path(mut self, index_path: impl Into<PathBuf>) -> Self {
        self.index_path = index_path.into();
        self
    }

    /// Sets the depth cutoff
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replaces the ignored directory names
    pub fn with_ignored_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Names of required settings that are absent.
    ///
    /// The port is always present once parsed, so only the scan root can
    /// show up here.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.port == 0 {
            missing.push(PORT_ENV_VAR);
        }
        if self.scan_path.is_none() {
            missing.push(SCAN_PATH_ENV_VAR);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.ignored_dirs, vec!["node_modules".to_string()]);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.scan_path.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_port(8080)
            .with_scan_path(Some(PathBuf::from("/media")))
            .with_max_depth(1)
            .with_ignored_dirs(["target", "build"])
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.port, 8080);
        assert_eq!(config.scan_path, Some(PathBuf::from("/media")));
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.ignored_dirs, vec!["target", "build"]);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_missing_settings() {
        let config = Config::new().with_port(3000);
        assert_eq!(config.missing_settings(), vec![SCAN_PATH_ENV_VAR]);

        let config = config.with_scan_path(Some(PathBuf::from("/media")));
        assert!(config.missing_settings().is_empty());

        assert_eq!(Config::new().missing_settings(), vec![PORT_ENV_VAR, SCAN_PATH_ENV_VAR]);
    }
}
