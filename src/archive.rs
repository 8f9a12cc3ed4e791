//! Per-archive processing.
//!
//! Unpacks one APK into a scratch directory, walks every file it contains,
//! runs both extractors over each, and pools the results into a single set
//! for the archive. The scratch directory is deleted on every exit path.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ScanConfig;
use crate::extract::strings_from_file;
use crate::filter::filter_by_size;
use crate::provenance::{FileLocation, ProvenanceIndex};

/// File suffixes recognized as dex bytecode when --onlydex is active.
const DEX_SUFFIXES: [&str; 2] = [".dex", ".smali"];

/// Process one archive and return its pooled string set.
///
/// Every string that survives the size filter is recorded in the provenance
/// index under `<file>:<archive_name>`, where the file path is relative to
/// the archive root. A corrupt or unreadable archive is an error; it
/// propagates to the caller, with the scratch directory already cleaned up.
pub fn process_archive(
    archive_path: &Path,
    archive_name: &str,
    config: &ScanConfig,
    index: &mut ProvenanceIndex,
) -> Result<HashSet<String>> {
    let scratch = tempfile::tempdir_in(&config.scratch_base)
        .context("Failed to create scratch directory")?;

    debug!(
        "Unzipping {} into {}",
        archive_path.display(),
        scratch.path().display()
    );
    extract_zip_to_dir(archive_path, scratch.path())
        .with_context(|| format!("Failed to extract {}", archive_path.display()))?;

    debug!("Getting strings from {}", scratch.path().display());
    let mut pooled = HashSet::new();

    for entry in walkdir::WalkDir::new(scratch.path())
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if config.only_dex && !DEX_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            continue;
        }

        let mut strings = strings_from_file(entry.path(), config.min_len)?;
        filter_by_size(&mut strings, config.min_len);

        let rel_path = entry
            .path()
            .strip_prefix(scratch.path())
            .unwrap_or(entry.path());
        let location = FileLocation::new(rel_path.to_string_lossy(), archive_name);
        index.record(&strings, &location);

        pooled.extend(strings);
    }

    debug!("Removing dir {}", scratch.path().display());
    Ok(pooled)
}

/// Unpack a zip archive into `dest`.
fn extract_zip_to_dir(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open {}", archive_path.display()))?;
    let reader = BufReader::new(file);
    let mut archive = zip::ZipArchive::new(reader)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        // Entries with traversal components would land outside the scratch dir
        let Some(rel_path) = entry.enclosed_name() else {
            debug!("Skipping zip entry with unsafe path: {}", entry.name());
            continue;
        };
        let out_path = dest.join(rel_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut output = File::create(&out_path)?;
            std::io::copy(&mut entry, &mut output)?;
        }
    }

    Ok(())
}
