//! Size and whitelist filtering.
//!
//! The size filter runs per file, before strings reach the provenance index
//! or an archive's pooled set. The whitelist is subtracted exactly once, from
//! the final intersection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Remove every string shorter than `min_len`, in place.
pub fn filter_by_size(strings: &mut HashSet<String>, min_len: usize) {
    strings.retain(|s| s.len() >= min_len);
}

/// Load a whitelist file: one string per line, taken verbatim.
///
/// No per-line trimming or other normalization - whitelist matching is by
/// exact content. The caller is responsible for deciding what to do when the
/// file does not exist.
pub fn load_whitelist(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read whitelist {}", path.display()))?;

    Ok(contents.lines().map(str::to_owned).collect())
}

/// Subtract the whitelist from the candidate set. Exact string equality.
pub fn subtract_whitelist(
    candidates: &HashSet<String>,
    whitelist: &HashSet<String>,
) -> HashSet<String> {
    candidates.difference(whitelist).cloned().collect()
}
