use std::path::PathBuf;

use crate::errors::CamnodeError;

/// Terminal resolution failures. Lower-level I/O and probe failures never
/// surface here; they only cause a candidate to be skipped or rejected.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No video devices found with name '{target}'. Is the camera connected?")]
    NotFound { target: String },

    #[error(
        "Found devices [{}] for '{target}', but none expose a valid video stream",
        join_paths(.candidates)
    )]
    NoValidStream {
        target: String,
        candidates: Vec<PathBuf>,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ResolveError {
    pub fn target(&self) -> &str {
        match self {
            ResolveError::NotFound { target } | ResolveError::NoValidStream { target, .. } => {
                target
            }
        }
    }
}

impl CamnodeError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::NotFound { .. } => "DEVICE_NOT_FOUND",
            ResolveError::NoValidStream { .. } => "NO_VALID_STREAM",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
