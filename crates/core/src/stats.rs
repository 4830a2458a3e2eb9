use serde::{Deserialize, Serialize};

/// Counters collected while processing one line block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Lines handed to the processor.
    pub input_lines: usize,
    /// Whitespace-only lines dropped before sorting.
    pub blank_removed: usize,
    /// Lines collapsed into an equal-ranked neighbour.
    pub duplicates_removed: usize,
    /// Lines whose key is not in the priority list.
    pub unknown_keys: usize,
    /// Lines in the result.
    pub output_lines: usize,
}

impl SortStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether processing dropped any line.
    #[must_use]
    pub fn removed_any(&self) -> bool {
        self.blank_removed + self.duplicates_removed > 0
    }
}
