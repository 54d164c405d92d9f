//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{ProbeConfig, RegistryConfig, TargetsConfig};
use std::path::PathBuf;

/// Minimum discrete frame width of a streaming node.
pub const DEFAULT_MIN_WIDTH: u32 = 3000;

/// Minimum discrete frame height of a streaming node.
pub const DEFAULT_MIN_HEIGHT: u32 = 2000;

/// Returns the names of the two GelSight Mini sensors shipped in the default setup.
///
/// The kernel truncates the USB product string to 31 bytes, hence the
/// dangling `: Ge` suffix.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_target_names() -> Vec<String> {
    vec![
        "GelSight Mini R0B 2DDZ-43PB: Ge".to_string(),
        "GelSight Mini R0B 2DE9-0HLG: Ge".to_string(),
    ]
}

pub fn default_tool() -> String {
    "v4l2-ctl".to_string()
}

pub fn default_min_width() -> u32 {
    DEFAULT_MIN_WIDTH
}

pub fn default_min_height() -> u32 {
    DEFAULT_MIN_HEIGHT
}

pub fn default_registry_root() -> PathBuf {
    PathBuf::from("/sys/class/video4linux")
}

pub fn default_dev_dir() -> PathBuf {
    PathBuf::from("/dev")
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            names: default_target_names(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root: default_registry_root(),
            dev_dir: default_dev_dir(),
        }
    }
}
