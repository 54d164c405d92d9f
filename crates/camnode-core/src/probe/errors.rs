use crate::errors::CamnodeError;

/// Failure to obtain a format listing from the capability tool.
///
/// Never crosses the prober boundary: every variant means "this device does
/// not qualify".
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Capability tool '{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    #[error("Failed to run '{tool}': {source}")]
    LaunchFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' exited with {status} for {device}")]
    ToolFailed {
        tool: String,
        device: String,
        status: String,
    },
}

impl CamnodeError for ProbeError {
    fn error_code(&self) -> &'static str {
        match self {
            ProbeError::ToolNotFound { .. } => "PROBE_TOOL_NOT_FOUND",
            ProbeError::LaunchFailed { .. } => "PROBE_LAUNCH_FAILED",
            ProbeError::ToolFailed { .. } => "PROBE_TOOL_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProbeError::ToolNotFound { .. })
    }
}
