use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH};

use super::errors::ResolveError;

/// What to resolve: an exact device name and the frame size a streaming node
/// must advertise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionQuery {
    pub target_name: String,
    pub min_width: u32,
    pub min_height: u32,
}

impl ResolutionQuery {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }

    pub fn with_min_size(mut self, min_width: u32, min_height: u32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }
}

/// Resolution outcome for one target in a batch.
#[derive(Debug)]
pub struct TargetOutcome {
    pub name: String,
    pub result: Result<PathBuf, ResolveError>,
}
