//! Parsing of `v4l2-ctl --list-formats-ext` output.
//!
//! Kept free of process handling so the listing format can change without
//! touching resolution logic.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Resolution;

static DISCRETE_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Size:\s+Discrete\s+([0-9]+)x([0-9]+)").expect("discrete size pattern is valid")
});

/// Extract every `Size: Discrete <w>x<h>` declaration from a format listing.
///
/// Sizes appear in listing order, duplicates included. Dimensions are ASCII
/// digits only; a dimension too large for a `u32` saturates to `u32::MAX`.
pub fn parse_discrete_sizes(listing: &str) -> Vec<Resolution> {
    DISCRETE_SIZE
        .captures_iter(listing)
        .map(|caps| Resolution::new(parse_dimension(&caps[1]), parse_dimension(&caps[2])))
        .collect()
}

/// `digits` is a non-empty ASCII digit run, so parsing only fails on overflow.
fn parse_dimension(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// Whether any of `sizes` meets the threshold.
pub fn has_size_at_least(sizes: &[Resolution], min_width: u32, min_height: u32) -> bool {
    sizes.iter().any(|res| res.meets(min_width, min_height))
}
