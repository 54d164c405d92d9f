//! Configuration validation.

use crate::config::types::CamnodeConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when a threshold is zero,
/// the probe tool is blank, or a target name is blank.
pub fn validate_config(config: &CamnodeConfig) -> Result<(), ConfigError> {
    if config.probe.min_width == 0 || config.probe.min_height == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "probe thresholds must be positive (got {}x{})",
                config.probe.min_width, config.probe.min_height
            ),
        });
    }

    if config.probe.tool.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "probe.tool must not be empty".to_string(),
        });
    }

    if let Some(index) = config
        .targets
        .names
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("targets.names[{index}] must not be empty"),
        });
    }

    Ok(())
}
