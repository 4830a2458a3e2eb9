use concentric_core::block::process_with_stats;
use concentric_core::comparator::ConcentricComparator;
use concentric_core::priority::PriorityIndex;
use concentric_core::property::try_extract_key;
use concentric_core::stats::SortStats;

use crate::config::Config;
use crate::document::{Document, Selection, TextEdit};
use crate::error::{EngineError, Result};
use crate::options::MalformedLinePolicy;

/// A ready-to-apply replacement for the selected lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEdit {
    pub edit: TextEdit,
    pub stats: SortStats,
}

/// Sort the lines touched by `selection`.
///
/// Returns `Ok(None)` for a single-line selection: there is nothing to order.
///
/// # Errors
/// Fails if the selection is outside the document, or if a line has no
/// separator under [`MalformedLinePolicy::Abort`].
pub fn sort_selection(
    document: &Document,
    selection: &Selection,
    config: &Config,
) -> Result<Option<SortEdit>> {
    let span = selection.line_span();
    let lines = document.lines_in(span)?;

    if selection.is_single_line() {
        log::debug!("single-line selection; nothing to sort");
        return Ok(None);
    }
    let (sorted, stats) = sort_lines(lines, span.start, config)?;

    let edit = TextEdit {
        range: document.full_line_range(span)?,
        new_text: sorted.join(document.line_ending().as_str()),
    };
    log::debug!(
        "sorted lines {}..={}: {} in, {} out",
        span.start + 1,
        span.end + 1,
        stats.input_lines,
        stats.output_lines
    );
    Ok(Some(SortEdit { edit, stats }))
}

/// Sort a detached block of lines. `first_line` is the zero-based document
/// line of `lines[0]`, used for error messages.
///
/// # Errors
/// Returns [`EngineError::MalformedLine`] under [`MalformedLinePolicy::Abort`].
pub fn sort_lines(
    lines: Vec<String>,
    first_line: usize,
    config: &Config,
) -> Result<(Vec<String>, SortStats)> {
    if config.malformed == MalformedLinePolicy::Abort {
        check_separators(&lines, first_line)?;
    }

    let list = config.priority_list();
    let index = if config.normalize_keys {
        PriorityIndex::normalized(&list)
    } else {
        PriorityIndex::new(&list)
    };
    let comparator = ConcentricComparator::new(&index, config.placement)
        .with_normalization(config.normalize_keys);

    Ok(process_with_stats(lines, config.block_options(), &comparator))
}

fn check_separators(lines: &[String], first_line: usize) -> Result<()> {
    for (offset, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(malformed) = try_extract_key(line) {
            return Err(EngineError::MalformedLine {
                line_number: first_line + offset + 1,
                line: malformed.line,
            });
        }
    }
    Ok(())
}
