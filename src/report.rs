//! Result rendering.
//!
//! Two modes: bare strings, one per line, or each string with the files it
//! was found in. Provenance lines come from the global index, so a string's
//! listing covers every file that contained it, not just the ones that put
//! it into the intersection.

use std::collections::HashSet;
use std::fmt::Write;

use crate::provenance::ProvenanceIndex;

/// Print the final candidate set to stdout.
pub fn print_report(candidates: &HashSet<String>, index: &ProvenanceIndex, with_sources: bool) {
    print!("{}", render_report(candidates, index, with_sources));
}

/// Render the report. An empty candidate set renders as a single warning
/// line instead of an empty listing.
pub fn render_report(
    candidates: &HashSet<String>,
    index: &ProvenanceIndex,
    with_sources: bool,
) -> String {
    let mut out = String::new();

    if candidates.is_empty() {
        out.push_str("[!] No common strings found\n");
        return out;
    }

    for string in candidates {
        if with_sources {
            let _ = writeln!(out, "Candidate: {}", string);
            if let Some(locations) = index.locations(string) {
                for location in locations {
                    let _ = writeln!(out, "\tFound in {}", location);
                }
            }
        } else {
            let _ = writeln!(out, "{}", string);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provenance::FileLocation;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bare_mode_one_per_line() {
        let candidates = set(&["first", "second"]);
        let report = render_report(&candidates, &ProvenanceIndex::new(), false);

        let mut lines: Vec<&str> = report.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_provenance_mode_lists_locations() {
        let candidates = set(&["shared"]);
        let mut index = ProvenanceIndex::new();
        index.record(&candidates, &FileLocation::new("classes.dex", "a.apk"));
        index.record(&candidates, &FileLocation::new("classes.dex", "b.apk"));

        let report = render_report(&candidates, &index, true);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Candidate: shared");
        assert!(lines.contains(&"\tFound in classes.dex:a.apk"));
        assert!(lines.contains(&"\tFound in classes.dex:b.apk"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_set_is_a_single_warning() {
        for with_sources in [false, true] {
            let report = render_report(&HashSet::new(), &ProvenanceIndex::new(), with_sources);
            assert_eq!(report, "[!] No common strings found\n");
        }
    }
}
