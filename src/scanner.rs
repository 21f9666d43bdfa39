//! Recursive media tree scanner
//!
//! Walks a root directory up to a bounded depth and builds a nested tree of
//! the image, video and audio files it finds. The scan is read-only and
//! tolerant of partial failure: a directory or entry that cannot be read is
//! logged and left out, and the rest of the tree is still returned.

use crate::{config::Config, types::MediaKind, utils::classify, utils::relative_slash_path};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use std::{
    collections::HashSet,
    fs::{self, DirEntry},
    path::Path,
};

/// Classified contents of one directory level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanNode {
    /// Media files found directly in this directory
    pub files: Vec<MediaFile>,
    /// Subdirectories, each with its own nested contents
    pub folders: Vec<FolderEntry>,
}

impl ScanNode {
    /// True when the level holds neither files nor folders
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Number of media files in this level and every level below it
    pub fn media_count(&self) -> usize {
        self.files.len()
            + self
                .folders
                .iter()
                .map(|folder| folder.items.media_count())
                .sum::<usize>()
    }
}

/// A recognized media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    /// Base file name
    pub name: String,
    /// Slash separated path relative to the scan root
    pub path: String,
    /// Kind derived from the extension
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Size in bytes
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Last modification time, when the platform reports one
    #[serde(rename = "modified")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// A subdirectory and its scanned contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    /// Base directory name
    pub name: String,
    /// Slash separated path relative to the scan root
    pub path: String,
    /// Contents, empty past the depth cutoff
    pub items: ScanNode,
}

/// Builds [`ScanNode`] trees from the filesystem
#[derive(Debug, Clone)]
pub struct Scanner {
    max_depth: usize,
    ignored_dirs: HashSet<String>,
}

impl Scanner {
    /// Creates a scanner with the given depth cutoff and no ignored names
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ignored_dirs: HashSet::new(),
        }
    }

    /// Creates a scanner from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_depth).with_ignored_dirs(config.ignored_dirs.iter().cloned())
    }

    /// Replaces the set of names skipped at every level
    pub fn with_ignored_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Scans `root` and returns its tree
    ///
    /// Every `path` in the result is relative to `root`.
    pub fn scan(&self, root: &Path) -> ScanNode {
        info!("Scanning directory: {}", root.display());
        let node = self.scan_at(root, root, 0);
        debug!(
            "Found {} media files under {}",
            node.media_count(),
            root.display()
        );
        node
    }

    fn scan_at(&self, dir: &Path, root: &Path, depth: usize) -> ScanNode {
        let mut node = ScanNode::default();
        if depth > self.max_depth {
            return node;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Error scanning directory {}: {err}", dir.display());
                return node;
            }
        };

        let mut entries: Vec<DirEntry> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Error reading entry in {}: {err}", dir.display());
                    None
                }
            })
            .collect();
        // Sort for consistent ordering between calls
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping non UTF-8 name in {}: {raw:?}", dir.display());
                    continue;
                }
            };
            if self.is_skipped(&name) {
                continue;
            }

            let entry_path = entry.path();
            // file_type() does not follow symlinks
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    warn!("Error reading type of {}: {err}", entry_path.display());
                    continue;
                }
            };

            if file_type.is_dir() {
                let items = self.scan_at(&entry_path, root, depth + 1);
                node.folders.push(FolderEntry {
                    name,
                    path: relative_slash_path(root, &entry_path),
                    items,
                });
            } else if file_type.is_file() {
                let Some(kind) = classify(&name) else {
                    continue;
                };
                let metadata = match entry.metadata() {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        warn!("Error reading metadata of {}: {err}", entry_path.display());
                        continue;
                    }
                };
                node.files.push(MediaFile {
                    path: relative_slash_path(root, &entry_path),
                    name,
                    kind,
                    size_bytes: metadata.len(),
                    modified_at: metadata.modified().ok().map(DateTime::<Utc>::from),
                });
            } else {
                debug!("Skipping special file: {}", entry_path.display());
            }
        }

        node
    }

    fn is_skipped(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignored_dirs.contains(name)
    }
}
