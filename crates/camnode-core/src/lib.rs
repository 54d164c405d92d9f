//! camnode-core: resolve the streaming video node of a named camera
//!
//! A single camera sensor can expose several video4linux nodes under the same
//! advertised name (a metadata/control node next to the real capture node).
//! This library matches names against the kernel device registry and then
//! probes each match with `v4l2-ctl` to find the node that advertises a large
//! discrete frame size.
//!
//! # Main Entry Points
//!
//! - [`resolver`] - Two-stage name match + capability resolution
//! - [`probe`] - Capability probing and format listing parsing
//! - [`registry`] - video4linux registry enumeration
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod probe;
pub mod registry;
pub mod resolver;

// Re-export commonly used types at crate root for convenience
pub use config::CamnodeConfig;
pub use probe::{CapabilityTool, ProbeReport, Resolution, V4l2Ctl};
pub use registry::{DeviceEntry, DeviceRegistry, NamedDevice, SysfsRegistry};
pub use resolver::{ResolutionQuery, ResolveError, TargetOutcome};

// Re-export handler modules as the primary API
pub use probe::handler as probe_ops;
pub use resolver::handler as resolve_ops;

// Re-export logging initialization
pub use logging::init_logging;
