use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A discrete frame size advertised by a capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether this size is at least `min_width` x `min_height` in both dimensions.
    pub fn meets(&self, min_width: u32, min_height: u32) -> bool {
        self.width >= min_width && self.height >= min_height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Detailed result of probing one device, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub device: PathBuf,
    pub min_width: u32,
    pub min_height: u32,
    /// Every discrete size in the tool output, in listing order.
    pub resolutions: Vec<Resolution>,
    /// Whether any listed size meets the threshold.
    pub valid_stream: bool,
    /// Why the tool produced no usable listing, if it failed.
    pub error: Option<String>,
}
