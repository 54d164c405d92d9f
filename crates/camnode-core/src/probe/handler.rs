use std::path::Path;

use tracing::{debug, info, warn};

use super::errors::ProbeError;
use super::parse::{has_size_at_least, parse_discrete_sizes};
use super::tool::CapabilityTool;
use super::types::ProbeReport;

/// Whether `device` advertises a discrete frame size of at least
/// `min_width` x `min_height`.
///
/// Any failure to obtain the format listing counts as "not a valid stream".
pub fn probe(tool: &dyn CapabilityTool, device: &Path, min_width: u32, min_height: u32) -> bool {
    probe_device(tool, device, min_width, min_height).valid_stream
}

/// Probe `device` and report every advertised size alongside the verdict.
pub fn probe_device(
    tool: &dyn CapabilityTool,
    device: &Path,
    min_width: u32,
    min_height: u32,
) -> ProbeReport {
    debug!(
        event = "core.probe.device_started",
        device = %device.display(),
        min_width = min_width,
        min_height = min_height
    );

    let listing = match tool.list_formats(device) {
        Ok(listing) => listing,
        Err(e) => {
            log_probe_failure(device, &e);
            return ProbeReport {
                device: device.to_path_buf(),
                min_width,
                min_height,
                resolutions: Vec::new(),
                valid_stream: false,
                error: Some(e.to_string()),
            };
        }
    };

    let resolutions = parse_discrete_sizes(&listing);
    let valid_stream = has_size_at_least(&resolutions, min_width, min_height);

    info!(
        event = "core.probe.device_completed",
        device = %device.display(),
        sizes = resolutions.len(),
        valid_stream = valid_stream
    );

    ProbeReport {
        device: device.to_path_buf(),
        min_width,
        min_height,
        resolutions,
        valid_stream,
        error: None,
    }
}

fn log_probe_failure(device: &Path, error: &ProbeError) {
    match error {
        ProbeError::ToolNotFound { .. } | ProbeError::LaunchFailed { .. } => warn!(
            event = "core.probe.tool_unavailable",
            device = %device.display(),
            error = %error
        ),
        ProbeError::ToolFailed { .. } => debug!(
            event = "core.probe.device_rejected",
            device = %device.display(),
            error = %error
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::types::Resolution;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Canned listings keyed by device path; unknown devices fail like an
    /// inaccessible node.
    struct ScriptedTool(HashMap<PathBuf, String>);

    impl ScriptedTool {
        fn with(device: &str, listing: &str) -> Self {
            Self(HashMap::from([(PathBuf::from(device), listing.to_string())]))
        }
    }

    impl CapabilityTool for ScriptedTool {
        fn list_formats(&self, device: &Path) -> Result<String, ProbeError> {
            self.0
                .get(device)
                .cloned()
                .ok_or_else(|| ProbeError::ToolFailed {
                    tool: "scripted".to_string(),
                    device: device.display().to_string(),
                    status: "exit status: 1".to_string(),
                })
        }
    }

    #[test]
    fn test_probe_accepts_high_resolution() {
        let tool = ScriptedTool::with("/dev/video0", "\t\tSize: Discrete 3280x2464\n");
        assert!(probe(&tool, Path::new("/dev/video0"), 3000, 2000));
    }

    #[test]
    fn test_probe_rejects_low_resolution() {
        let tool = ScriptedTool::with("/dev/video0", "\t\tSize: Discrete 640x480\n");
        assert!(!probe(&tool, Path::new("/dev/video0"), 3000, 2000));
    }

    #[test]
    fn test_probe_tool_failure_is_false() {
        let tool = ScriptedTool(HashMap::new());
        assert!(!probe(&tool, Path::new("/dev/video1"), 1, 1));
    }

    #[test]
    fn test_probe_monotonic_in_threshold() {
        let tool = ScriptedTool::with("/dev/video0", "Size: Discrete 4000x3000\n");
        let device = Path::new("/dev/video0");
        assert!(probe(&tool, device, 4000, 3000));
        for (w, h) in [(3999, 3000), (4000, 1), (1, 1), (3000, 2000)] {
            assert!(probe(&tool, device, w, h));
        }
    }

    #[test]
    fn test_probe_device_reports_sizes() {
        let tool = ScriptedTool::with(
            "/dev/video2",
            "Size: Discrete 640x480\nSize: Discrete 4000x3000\n",
        );
        let report = probe_device(&tool, Path::new("/dev/video2"), 3000, 2000);
        assert!(report.valid_stream);
        assert!(report.error.is_none());
        assert_eq!(
            report.resolutions,
            vec![Resolution::new(640, 480), Resolution::new(4000, 3000)]
        );
    }

    #[test]
    fn test_oversized_dimension_still_qualifies() {
        let tool = ScriptedTool::with("/dev/video0", "\t\tSize: Discrete 5000000000x3000\n");
        let report = probe_device(&tool, Path::new("/dev/video0"), 3000, 2000);
        assert!(report.valid_stream);
        assert_eq!(report.resolutions, vec![Resolution::new(u32::MAX, 3000)]);
    }

    #[test]
    fn test_any_qualifying_line_in_any_order() {
        let device = Path::new("/dev/video0");
        let low_first = ScriptedTool::with(
            "/dev/video0",
            "Size: Discrete 640x480\nSize: Discrete 3280x2464\n",
        );
        let high_first = ScriptedTool::with(
            "/dev/video0",
            "Size: Discrete 3280x2464\nSize: Discrete 640x480\n",
        );
        assert!(probe(&low_first, device, 3000, 2000));
        assert!(probe(&high_first, device, 3000, 2000));
        assert!(!probe(&low_first, device, 3281, 2000));
    }

    #[test]
    fn test_probe_device_reports_error() {
        let tool = ScriptedTool(HashMap::new());
        let report = probe_device(&tool, Path::new("/dev/video3"), 3000, 2000);
        assert!(!report.valid_stream);
        assert!(report.resolutions.is_empty());
        assert_eq!(
            report.error.as_deref(),
            Some("'scripted' exited with exit status: 1 for /dev/video3")
        );
    }
}
