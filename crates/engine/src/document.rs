// crates/engine/src/document.rs
//! In-memory document with line/column addressing and whole-span edits.
//!
//! This is the host side of a sort: it hands the selected lines to the core
//! and receives one replacement text for the full span, which it applies in a
//! single step.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF if the text contains one, LF otherwise. Used for newly joined
    /// lines only; existing lines keep their own terminator.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") { Self::CrLf } else { Self::Lf }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Zero-based line and character column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Inclusive span of zero-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A user selection; anchor and active end may be in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    #[must_use]
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    #[must_use]
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.anchor.line == self.active.line
    }

    /// Lines touched by the selection.
    #[must_use]
    pub fn line_span(&self) -> LineSpan {
        LineSpan::new(self.start().line, self.end().line)
    }
}

impl From<LineSpan> for Selection {
    fn from(span: LineSpan) -> Self {
        Self::new(Position::new(span.start, 0), Position::new(span.end, 0))
    }
}

/// Replace `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// One line of text and the terminator that followed it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    ending: Option<LineEnding>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    line_ending: LineEnding,
}

impl Document {
    /// A final terminator does not start a new line; a lone `\r` without
    /// `\n` stays part of the text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut lines = split_lines(text);
        if lines.len() > 1 && lines.last().is_some_and(|l| l.text.is_empty()) {
            lines.pop();
        }
        Self {
            lines,
            line_ending: LineEnding::detect(text),
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.text.as_str())
    }

    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Selection covering every line.
    #[must_use]
    pub fn full_selection(&self) -> Selection {
        let last = self.lines.len().saturating_sub(1);
        Selection::from(LineSpan::new(0, last))
    }

    /// Copy of the lines in `span`.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRange`] if the span is inverted or runs
    /// past the last line.
    pub fn lines_in(&self, span: LineSpan) -> Result<Vec<String>> {
        self.check_span(span)?;
        Ok(self.lines[span.start..=span.end]
            .iter()
            .map(|l| l.text.clone())
            .collect())
    }

    /// Column 0 of the first line through the end of the last line.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRange`] for an out-of-bounds span.
    pub fn full_line_range(&self, span: LineSpan) -> Result<Range> {
        self.check_span(span)?;
        let end_column = self.lines[span.end].text.chars().count();
        Ok(Range {
            start: Position::new(span.start, 0),
            end: Position::new(span.end, end_column),
        })
    }

    /// Apply `edit` as one replacement.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRange`] if the range does not address
    /// existing text; the document is left untouched in that case.
    pub fn apply(&mut self, edit: &TextEdit) -> Result<()> {
        let Range { start, end } = edit.range;
        let invalid = || EngineError::InvalidRange {
            start: start.line,
            end: end.line,
            line_count: self.lines.len(),
        };
        if start > end || end.line >= self.lines.len() {
            return Err(invalid());
        }

        let first = &self.lines[start.line].text;
        let last = &self.lines[end.line].text;
        let head = byte_offset(first, start.column).ok_or_else(invalid)?;
        let tail = byte_offset(last, end.column).ok_or_else(invalid)?;

        let mut replaced = String::with_capacity(head + edit.new_text.len() + last.len() - tail);
        replaced.push_str(&first[..head]);
        replaced.push_str(&edit.new_text);
        replaced.push_str(&last[tail..]);

        let mut lines = split_lines(&replaced);
        if let Some(tail_line) = lines.last_mut() {
            tail_line.ending = self.lines[end.line].ending;
        }
        self.lines.splice(start.line..=end.line, lines);
        Ok(())
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text);
            if let Some(ending) = line.ending {
                text.push_str(ending.as_str());
            }
        }
        text
    }

    fn check_span(&self, span: LineSpan) -> Result<()> {
        if span.start > span.end || span.end >= self.lines.len() {
            return Err(EngineError::InvalidRange {
                start: span.start,
                end: span.end,
                line_count: self.lines.len(),
            });
        }
        Ok(())
    }
}

/// Split at every `\n`; the last piece has no terminator and may be empty.
fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find('\n') {
        let (body, ending) = match rest[..pos].strip_suffix('\r') {
            Some(body) => (body, LineEnding::CrLf),
            None => (&rest[..pos], LineEnding::Lf),
        };
        lines.push(Line {
            text: body.to_string(),
            ending: Some(ending),
        });
        rest = &rest[pos + 1..];
    }
    lines.push(Line {
        text: rest.to_string(),
        ending: None,
    });
    lines
}

/// Byte offset of character `column`, allowing one past the end.
fn byte_offset(line: &str, column: usize) -> Option<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_line_endings() {
        for text in [
            "a: 1;\nb: 2;\n",
            "a: 1;\r\nb: 2;",
            "",
            "single",
            "\n",
            "a: 1;\r\nb: 2;\nc: 3;\r\n",
            "a: 1;\nb: 2;\r",
        ] {
            assert_eq!(Document::from_text(text).to_text(), text);
        }
    }

    #[test]
    fn lone_carriage_return_stays_in_the_text() {
        let doc = Document::from_text("a: 1;\r");
        assert_eq!(doc.line(0), Some("a: 1;\r"));
        assert_eq!(doc.to_text(), "a: 1;\r");
    }

    #[test]
    fn edit_keeps_terminators_outside_the_span() {
        let mut doc = Document::from_text("b: 2;\r\na: 1;\nc: 3;\n");
        assert_eq!(doc.line_ending(), LineEnding::CrLf);
        let range = doc.full_line_range(LineSpan::new(0, 1)).unwrap();
        doc.apply(&TextEdit {
            range,
            new_text: "a: 1;\r\nb: 2;".to_string(),
        })
        .unwrap();
        assert_eq!(doc.to_text(), "a: 1;\r\nb: 2;\nc: 3;\n");
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        let doc = Document::from_text("a: 1;\nb: 2;\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(1), Some("b: 2;"));
    }

    #[test]
    fn selection_direction_does_not_matter() {
        let sel = Selection::new(Position::new(4, 2), Position::new(1, 7));
        assert_eq!(sel.line_span(), LineSpan::new(1, 4));
        assert!(!sel.is_single_line());
        assert!(Selection::new(Position::new(3, 0), Position::new(3, 9)).is_single_line());
    }

    #[test]
    fn full_line_range_spans_to_line_end() {
        let doc = Document::from_text("x {\n  b: 2;\n  a: 1;\n}");
        let range = doc.full_line_range(LineSpan::new(1, 2)).unwrap();
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(2, 7));
    }

    #[test]
    fn apply_replaces_whole_span_at_once() {
        let mut doc = Document::from_text("x {\r\n  b: 2;\r\n  a: 1;\r\n}\r\n");
        let range = doc.full_line_range(LineSpan::new(1, 2)).unwrap();
        doc.apply(&TextEdit {
            range,
            new_text: "  a: 1;\r\n  b: 2;".to_string(),
        })
        .unwrap();
        assert_eq!(doc.to_text(), "x {\r\n  a: 1;\r\n  b: 2;\r\n}\r\n");
    }

    #[test]
    fn apply_can_shrink_the_document() {
        let mut doc = Document::from_text("a: 1;\na: 1;\nb: 2;");
        let range = doc.full_line_range(LineSpan::new(0, 2)).unwrap();
        doc.apply(&TextEdit {
            range,
            new_text: "a: 1;\nb: 2;".to_string(),
        })
        .unwrap();
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn out_of_range_spans_are_rejected() {
        let doc = Document::from_text("a: 1;\nb: 2;");
        assert!(matches!(
            doc.lines_in(LineSpan::new(1, 5)),
            Err(EngineError::InvalidRange { line_count: 2, .. })
        ));
        assert!(doc.lines_in(LineSpan::new(1, 0)).is_err());
    }

    #[test]
    fn columns_count_characters() {
        let doc = Document::from_text("content: \"→\";");
        let range = doc.full_line_range(LineSpan::new(0, 0)).unwrap();
        assert_eq!(range.end.column, 13);
    }
}
