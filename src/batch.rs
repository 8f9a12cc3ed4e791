//! Batch driving: enumerate the archive directory and intersect per-archive
//! string sets.

use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::archive::process_archive;
use crate::config::ScanConfig;
use crate::provenance::ProvenanceIndex;

/// Outcome of a full batch scan.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Strings common to every archive in the batch, before whitelisting.
    pub common: HashSet<String>,
    /// Where every observed string was seen, intersection member or not.
    pub index: ProvenanceIndex,
}

/// Scan every archive in the batch directory sequentially.
///
/// The first archive's set seeds the running intersection; each later
/// archive narrows it. Once the intersection is empty it stays empty, but
/// the remaining archives are still processed so the provenance index
/// covers the whole batch. Archives are taken in sorted name order; the
/// intersection itself does not depend on the order.
pub fn scan_batch(config: &ScanConfig) -> Result<ScanOutcome> {
    fs::create_dir_all(&config.scratch_base).with_context(|| {
        format!(
            "Failed to create scratch base {}",
            config.scratch_base.display()
        )
    })?;

    let mut archives = fs::read_dir(&config.batch_dir)
        .with_context(|| format!("Failed to list {}", config.batch_dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to list {}", config.batch_dir.display()))?;
    archives.sort_by_key(|entry| entry.file_name());

    if archives.is_empty() {
        warn!("No archives found in {}", config.batch_dir.display());
    }

    let mut index = ProvenanceIndex::new();
    let mut common: Option<HashSet<String>> = None;

    for entry in &archives {
        let archive_name = entry.file_name().to_string_lossy().to_string();
        debug!("Found apk {}", archive_name);

        let pooled = process_archive(&entry.path(), &archive_name, config, &mut index)?;

        common = Some(match common.take() {
            // First archive seeds the intersection; intersecting against
            // nothing would always yield nothing.
            None => pooled,
            Some(running) => running.intersection(&pooled).cloned().collect(),
        });
    }

    Ok(ScanOutcome {
        common: common.unwrap_or_default(),
        index,
    })
}
