pub mod errors;
pub mod handler;
pub mod parse;
pub mod tool;
pub mod types;

// Re-export commonly used types
pub use errors::ProbeError;
pub use handler::{probe, probe_device};
pub use parse::parse_discrete_sizes;
pub use tool::{CapabilityTool, V4l2Ctl};
pub use types::{ProbeReport, Resolution};
