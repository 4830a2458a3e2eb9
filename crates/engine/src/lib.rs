// crates/engine/src/lib.rs
pub mod config;
pub mod document;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod settings;
pub mod sorter;

use concentric_core::stats::SortStats;

use crate::config::Config;
use crate::document::{Document, Selection};
use crate::error::Result;

/// Outcome of sorting one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Full text after the edit, or the input unchanged.
    pub text: String,
    /// `None` when the selection was a single line and nothing ran.
    pub stats: Option<SortStats>,
}

impl RunResult {
    #[must_use]
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Sort `text` according to `config`.
///
/// The configured line span (or the whole text) is replaced in one edit; on
/// error the input is never partially rewritten.
///
/// # Errors
/// Propagates range and strict-mode failures from [`sorter::sort_selection`].
pub fn run(config: &Config, text: &str) -> Result<RunResult> {
    let mut document = Document::from_text(text);
    let selection = config
        .lines
        .map_or_else(|| document.full_selection(), Selection::from);

    match sorter::sort_selection(&document, &selection, config)? {
        Some(sorted) => {
            document.apply(&sorted.edit)?;
            Ok(RunResult {
                text: document.to_text(),
                stats: Some(sorted.stats),
            })
        }
        None => Ok(RunResult {
            text: text.to_string(),
            stats: None,
        }),
    }
}
