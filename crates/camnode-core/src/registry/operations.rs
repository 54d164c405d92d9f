use tracing::debug;

use super::DeviceRegistry;
use super::types::{CandidateCheck, DeviceEntry, NamedDevice};

/// Registry entries for video capture nodes are named `video<N>`.
pub const VIDEO_NODE_PREFIX: &str = "video";

pub fn is_video_node(id: &str) -> bool {
    id.starts_with(VIDEO_NODE_PREFIX)
}

/// Match one registry entry against `target_name`.
///
/// The name attribute is compared after trimming surrounding whitespace (the
/// kernel terminates it with a newline); the comparison itself is exact and
/// case-sensitive.
pub fn check_candidate(
    registry: &dyn DeviceRegistry,
    entry: &DeviceEntry,
    target_name: &str,
) -> CandidateCheck {
    if !is_video_node(&entry.id) {
        return CandidateCheck::Skip;
    }

    match registry.read_name(entry) {
        Ok(name) if name.trim() == target_name => CandidateCheck::Accept(entry.clone()),
        Ok(_) => CandidateCheck::Reject,
        Err(e) => {
            debug!(
                event = "core.registry.name_read_skipped",
                entry = %entry.id,
                path = %entry.name_path.display(),
                error = %e
            );
            CandidateCheck::Skip
        }
    }
}

/// Every video node in the registry with its name, in enumeration order.
pub fn list_devices(registry: &dyn DeviceRegistry) -> Vec<NamedDevice> {
    registry
        .entries()
        .into_iter()
        .filter(|entry| is_video_node(&entry.id))
        .map(|entry| {
            let name = registry
                .read_name(&entry)
                .ok()
                .map(|name| name.trim().to_string());
            NamedDevice {
                id: entry.id,
                path: entry.path,
                name,
            }
        })
        .collect()
}

/// Sort key that orders `video2` before `video10`.
///
/// Splits the id into its non-numeric prefix and trailing number; ids without
/// a trailing number sort before numbered ones sharing the prefix.
pub fn natural_key(id: &str) -> (&str, Option<u64>, &str) {
    let digits_start = id
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);

    match digits_start {
        Some(i) => (&id[..i], id[i..].parse().ok(), id),
        None => (id, None, id),
    }
}
