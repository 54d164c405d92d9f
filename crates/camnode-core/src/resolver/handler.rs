use std::path::PathBuf;

use tracing::{info, warn};

use crate::probe::{self, CapabilityTool};
use crate::registry::{CandidateCheck, DeviceEntry, DeviceRegistry, check_candidate};
use crate::resolver::{errors::ResolveError, types::*};

/// Resolve the streaming device node for `query.target_name`.
///
/// Stage 1 collects every registry entry whose name equals the target, in
/// enumeration order. Stage 2 probes them in that order and returns the first
/// one that advertises a frame size of at least `min_width` x `min_height`.
///
/// # Errors
///
/// - [`ResolveError::NotFound`] when no entry carries the target name.
/// - [`ResolveError::NoValidStream`] when entries match but none qualify.
pub fn resolve(
    query: &ResolutionQuery,
    registry: &dyn DeviceRegistry,
    tool: &dyn CapabilityTool,
) -> Result<PathBuf, ResolveError> {
    info!(
        event = "core.resolve.started",
        target = %query.target_name,
        min_width = query.min_width,
        min_height = query.min_height
    );

    let candidates = find_candidates(registry, &query.target_name);
    if candidates.is_empty() {
        warn!(event = "core.resolve.not_found", target = %query.target_name);
        return Err(ResolveError::NotFound {
            target: query.target_name.clone(),
        });
    }

    info!(
        event = "core.resolve.candidates_found",
        target = %query.target_name,
        count = candidates.len()
    );

    match select_stream(&candidates, tool, query.min_width, query.min_height) {
        Some(entry) => {
            info!(
                event = "core.resolve.completed",
                target = %query.target_name,
                device = %entry.path.display()
            );
            Ok(entry.path.clone())
        }
        None => {
            warn!(
                event = "core.resolve.no_valid_stream",
                target = %query.target_name,
                count = candidates.len()
            );
            Err(ResolveError::NoValidStream {
                target: query.target_name.clone(),
                candidates: candidates.into_iter().map(|e| e.path).collect(),
            })
        }
    }
}

/// Resolve each name independently. One failure does not stop the batch.
pub fn resolve_all(
    names: &[String],
    min_width: u32,
    min_height: u32,
    registry: &dyn DeviceRegistry,
    tool: &dyn CapabilityTool,
) -> Vec<TargetOutcome> {
    names
        .iter()
        .map(|name| {
            let query = ResolutionQuery::new(name.as_str()).with_min_size(min_width, min_height);
            TargetOutcome {
                name: name.clone(),
                result: resolve(&query, registry, tool),
            }
        })
        .collect()
}

/// Stage 1: registry entries whose name equals `target_name`, in enumeration order.
pub fn find_candidates(registry: &dyn DeviceRegistry, target_name: &str) -> Vec<DeviceEntry> {
    registry
        .entries()
        .iter()
        .filter_map(|entry| match check_candidate(registry, entry, target_name) {
            CandidateCheck::Accept(entry) => Some(entry),
            CandidateCheck::Reject | CandidateCheck::Skip => None,
        })
        .collect()
}

/// Stage 2: the first candidate whose probe succeeds.
pub fn select_stream<'a>(
    candidates: &'a [DeviceEntry],
    tool: &dyn CapabilityTool,
    min_width: u32,
    min_height: u32,
) -> Option<&'a DeviceEntry> {
    candidates
        .iter()
        .find(|entry| probe::probe(tool, &entry.path, min_width, min_height))
}
