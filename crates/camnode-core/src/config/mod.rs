//! # Configuration System
//!
//! Hierarchical TOML configuration for camnode.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.camnode/config.toml` (global user preferences)
//! 3. **Project config** - `./.camnode/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.camnode/config.toml
//! [targets]
//! names = ["GelSight Mini R0B 2DDZ-43PB: Ge", "GelSight Mini R0B 2DE9-0HLG: Ge"]
//!
//! [probe]
//! tool = "v4l2-ctl"
//! min_width = 3000
//! min_height = 2000
//!
//! [registry]
//! root = "/sys/class/video4linux"
//! dev_dir = "/dev"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use camnode_core::config::CamnodeConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CamnodeConfig::load_hierarchy()?;
//!     println!("{} targets configured", config.targets.names.len());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{CamnodeConfig, ProbeConfig, RegistryConfig, TargetsConfig};
pub use validation::validate_config;

use crate::errors::ConfigError;

impl CamnodeConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }
}
