use serde::Serialize;
use std::path::PathBuf;

/// One entry of the device registry, e.g. `/sys/class/video4linux/video2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    /// Registry entry name (`video2`)
    pub id: String,
    /// File holding the human-readable device name
    pub name_path: PathBuf,
    /// Device special file (`/dev/video2`)
    pub path: PathBuf,
}

/// Outcome of matching one registry entry against a target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateCheck {
    /// Not a video capture node, or its name could not be read.
    Skip,
    /// Readable name that differs from the target.
    Reject,
    /// Name matches the target exactly.
    Accept(DeviceEntry),
}

/// A video node and its advertised name, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct NamedDevice {
    pub id: String,
    pub path: PathBuf,
    /// `None` when the name attribute could not be read.
    pub name: Option<String>,
}
