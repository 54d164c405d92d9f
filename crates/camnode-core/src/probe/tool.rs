//! Capability tool invocation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::errors::ProbeError;

/// Source of a device's extended format listing.
pub trait CapabilityTool {
    /// Return the raw `--list-formats-ext` text for `device`.
    fn list_formats(&self, device: &Path) -> Result<String, ProbeError>;
}

/// `v4l2-ctl` (or a compatible executable) run as a child process.
#[derive(Debug, Clone)]
pub struct V4l2Ctl {
    program: String,
}

impl V4l2Ctl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn locate(&self) -> Result<PathBuf, ProbeError> {
        which::which(&self.program).map_err(|e| {
            debug!(
                event = "core.probe.tool_lookup_failed",
                tool = %self.program,
                error = %e
            );
            ProbeError::ToolNotFound {
                tool: self.program.clone(),
            }
        })
    }
}

impl Default for V4l2Ctl {
    fn default() -> Self {
        Self::new(crate::config::defaults::default_tool())
    }
}

impl CapabilityTool for V4l2Ctl {
    fn list_formats(&self, device: &Path) -> Result<String, ProbeError> {
        let program = self.locate()?;

        let output = Command::new(&program)
            .arg("--device")
            .arg(device)
            .arg("--list-formats-ext")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ProbeError::LaunchFailed {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::ToolFailed {
                tool: self.program.clone(),
                device: device.display().to_string(),
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
