pub mod errors;
pub mod handler;
pub mod types;

// Re-export commonly used types
pub use errors::ResolveError;
pub use handler::{find_candidates, resolve, resolve_all, select_stream};
pub use types::{ResolutionQuery, TargetOutcome};
