//! Provenance tracking: which files and archives a string was seen in.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// One place a string was observed: a file inside an archive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileLocation {
    file: String,
    archive: String,
}

impl FileLocation {
    pub fn new(file: impl Into<String>, archive: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            archive: archive.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn archive(&self) -> &str {
        &self.archive
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.archive)
    }
}

/// Maps every observed string to the set of locations it was seen in.
///
/// Grows monotonically for the lifetime of one scan. Entries are never
/// removed - strings that later drop out of the intersection stay indexed,
/// they just never get reported.
#[derive(Debug, Default)]
pub struct ProvenanceIndex {
    entries: HashMap<String, BTreeSet<FileLocation>>,
}

impl ProvenanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that every string in `strings` was seen at `location`.
    ///
    /// Re-recording the same (string, location) pair is a no-op.
    pub fn record(&mut self, strings: &HashSet<String>, location: &FileLocation) {
        for string in strings {
            self.entries
                .entry(string.clone())
                .or_default()
                .insert(location.clone());
        }
    }

    /// The locations a string was seen at, if it was seen at all.
    pub fn locations(&self, string: &str) -> Option<&BTreeSet<FileLocation>> {
        self.entries.get(string)
    }

    /// Number of distinct strings indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
