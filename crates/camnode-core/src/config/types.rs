//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every section is
//! optional; missing values fall back to the defaults in
//! [`super::defaults`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CamnodeConfig {
    /// Camera names checked by a bare `camnode` run
    #[serde(default)]
    pub targets: TargetsConfig,

    /// Capability probe settings
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Device registry locations
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Target camera names, matched exactly against the registry `name` attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "super::defaults::default_target_names")]
    pub names: Vec<String>,
}

/// Capability probe configuration.
///
/// A device qualifies as the streaming node when it lists at least one
/// discrete frame size of `min_width` x `min_height` or larger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Capability tool executable, looked up on `PATH` unless absolute.
    #[serde(default = "super::defaults::default_tool")]
    pub tool: String,

    #[serde(default = "super::defaults::default_min_width")]
    pub min_width: u32,

    #[serde(default = "super::defaults::default_min_height")]
    pub min_height: u32,
}

/// Device registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory holding one entry per video node (default: /sys/class/video4linux)
    #[serde(default = "super::defaults::default_registry_root")]
    pub root: PathBuf,

    /// Directory holding the device special files (default: /dev)
    #[serde(default = "super::defaults::default_dev_dir")]
    pub dev_dir: PathBuf,
}
