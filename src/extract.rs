//! String extraction backends.
//!
//! Two complementary extractors run against every file:
//! - `dexstrings` parses the string table out of dex bytecode
//! - `strings` scans raw bytes for printable runs above a minimum length
//!
//! Their results are unioned per file. A file that is not a dex container
//! makes `dexstrings` exit non-zero; that is expected and contributes an
//! empty set rather than an error.

use std::collections::HashSet;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Banner lines dexstrings prints before the string table starts.
const DEXSTRINGS_HEADER_LINES: usize = 4;

/// Why a dexstrings invocation produced no strings.
///
/// Callers that want the historical behavior collapse both variants into an
/// empty set; the split keeps "not a dex file" distinguishable from "tool
/// not installed" should stricter handling ever be wanted.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The tool ran but rejected the input (not a dex container).
    #[error("dexstrings rejected {0}")]
    NotApplicable(String),

    /// The tool could not be launched at all.
    #[error("failed to launch dexstrings: {0}")]
    Launch(#[from] std::io::Error),
}

/// Get the strings from one file: union of both backends.
///
/// A dexstrings failure of either kind is collapsed into an empty
/// contribution; the generic extractor is a hard prerequisite and its
/// failures propagate.
pub fn strings_from_file(path: &Path, min_len: usize) -> Result<HashSet<String>> {
    let mut strings = match dex_strings(path) {
        Ok(found) => found,
        Err(err) => {
            debug!("No dexstrings output for {}: {}", path.display(), err);
            HashSet::new()
        }
    };

    strings.extend(generic_strings(path, min_len)?);
    Ok(strings)
}

/// Run `dexstrings` against a file and parse its string table.
pub fn dex_strings(path: &Path) -> Result<HashSet<String>, BackendError> {
    let output = Command::new("dexstrings").arg(path).output()?;

    if !output.status.success() {
        return Err(BackendError::NotApplicable(path.display().to_string()));
    }

    Ok(parse_dexstrings_table(&String::from_utf8_lossy(
        &output.stdout,
    )))
}

/// Run `strings -n <min_len>` against a file.
pub fn generic_strings(path: &Path, min_len: usize) -> Result<HashSet<String>> {
    let bin = which::which("strings")
        .context("strings binary not found. Please install binutils.")?;

    let output = Command::new(&bin)
        .arg("-n")
        .arg(min_len.to_string())
        .arg(path)
        .output()
        .with_context(|| format!("Failed to run strings on {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "strings failed on {}: {}",
            path.display(),
            stderr.lines().next().unwrap_or("unknown error")
        );
    }

    Ok(parse_strings_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse the line-oriented table dexstrings writes to stdout.
///
/// The first lines are a banner. Each table line has the shape
/// `ID | I1 | I2 | .:STRING:.` - three pipe-delimited metadata columns,
/// then the payload wrapped in the `.:`/`:.` markers. The markers are
/// stripped and the payload kept verbatim, embedded pipes included; unlike
/// the generic extractor there is no whitespace trimming here. Lines that
/// do not match the shape are skipped.
fn parse_dexstrings_table(output: &str) -> HashSet<String> {
    output
        .lines()
        .skip(DEXSTRINGS_HEADER_LINES)
        .filter_map(|line| {
            let payload = line.splitn(4, '|').nth(3)?;
            payload
                .strip_prefix(" .:")?
                .strip_suffix(":.")
                .map(str::to_owned)
        })
        .collect()
}

/// Parse `strings` output: one string per line, trimmed of surrounding
/// whitespace.
fn parse_strings_output(output: &str) -> HashSet<String> {
    output.lines().map(|line| line.trim().to_owned()).collect()
}
