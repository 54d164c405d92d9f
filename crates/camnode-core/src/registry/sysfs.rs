//! video4linux registry backed by sysfs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::DeviceRegistry;
use super::operations::natural_key;
use super::types::DeviceEntry;
use crate::config::RegistryConfig;

/// Registry rooted at a sysfs class directory (`/sys/class/video4linux`).
///
/// Entries are returned in natural id order rather than directory order so
/// that the first matching node is the same on every run.
#[derive(Debug, Clone)]
pub struct SysfsRegistry {
    root: PathBuf,
    dev_dir: PathBuf,
}

impl SysfsRegistry {
    pub fn new(root: impl Into<PathBuf>, dev_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dev_dir: dev_dir.into(),
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(&config.root, &config.dev_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_for(&self, id: String) -> DeviceEntry {
        DeviceEntry {
            name_path: self.root.join(&id).join("name"),
            path: self.dev_dir.join(&id),
            id,
        }
    }
}

impl Default for SysfsRegistry {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}

impl DeviceRegistry for SysfsRegistry {
    fn entries(&self) -> Vec<DeviceEntry> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(
                    event = "core.registry.list_failed",
                    root = %self.root.display(),
                    error = %e
                );
                return Vec::new();
            }
        };

        let mut ids: Vec<String> = dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| match entry.file_name().into_string() {
                Ok(id) => Some(id),
                Err(raw) => {
                    debug!(
                        event = "core.registry.entry_skipped",
                        root = %self.root.display(),
                        entry = %raw.to_string_lossy(),
                        reason = "non-UTF-8 entry name"
                    );
                    None
                }
            })
            .collect();
        ids.sort_by(|a, b| natural_key(a).cmp(&natural_key(b)));

        ids.into_iter().map(|id| self.entry_for(id)).collect()
    }

    fn read_name(&self, entry: &DeviceEntry) -> io::Result<String> {
        fs::read_to_string(&entry.name_path)
    }
}
