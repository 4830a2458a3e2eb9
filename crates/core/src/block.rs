// crates/core/src/block.rs
//! Line block processing: blank filter, stable sort, adjacent dedup.

use alloc::string::String;
use alloc::vec::Vec;

use crate::comparator::ConcentricComparator;
use crate::stats::SortStats;

/// Cleanup passes around the sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockOptions {
    /// Drop whitespace-only lines before sorting.
    pub filter_blank: bool,
    /// Collapse adjacent lines that compare equal after sorting.
    pub dedup: bool,
}

/// Sort a block of declaration lines.
///
/// The whole result is returned at once so the caller can replace the
/// original span in a single edit.
#[must_use]
pub fn process(
    lines: Vec<String>,
    options: BlockOptions,
    comparator: &ConcentricComparator<'_>,
) -> Vec<String> {
    process_with_stats(lines, options, comparator).0
}

/// Same as [`process`], also reporting what each pass did.
#[must_use]
pub fn process_with_stats(
    lines: Vec<String>,
    options: BlockOptions,
    comparator: &ConcentricComparator<'_>,
) -> (Vec<String>, SortStats) {
    let mut stats = SortStats::new();
    stats.input_lines = lines.len();

    let mut lines = if options.filter_blank {
        remove_blank_lines(lines)
    } else {
        lines
    };
    stats.blank_removed = stats.input_lines - lines.len();

    sort_lines(&mut lines, comparator);
    stats.unknown_keys = lines
        .iter()
        .filter(|line| comparator.rank(line).is_none())
        .count();

    if options.dedup {
        let before = lines.len();
        lines = remove_adjacent_duplicates(lines, comparator);
        stats.duplicates_removed = before - lines.len();
    }
    stats.output_lines = lines.len();

    log::trace!("processed line block: {stats:?}");
    (lines, stats)
}

/// Order-preserving removal of whitespace-only lines.
#[must_use]
pub fn remove_blank_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Stable sort; equal-ranked lines keep their input order.
pub fn sort_lines(lines: &mut [String], comparator: &ConcentricComparator<'_>) {
    lines.sort_by(|a, b| comparator.compare(a, b));
}

/// Keep a line only if it differs from the last kept line.
///
/// Equality is the comparator's: two different declarations of the same
/// property collapse to whichever came first.
#[must_use]
pub fn remove_adjacent_duplicates(
    lines: Vec<String>,
    comparator: &ConcentricComparator<'_>,
) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let duplicate = kept
            .last()
            .is_some_and(|prev| comparator.compare(prev, &line).is_eq());
        if !duplicate {
            kept.push(line);
        }
    }
    kept
}
