// crates/core/src/property.rs
//! Property-name extraction from declaration lines.
//!
//! A declaration line looks like `  margin-top: 4px;`. The key is everything
//! before the first `:` with surrounding whitespace trimmed. Values are never
//! inspected.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use crate::error::MalformedLine;

const SEPARATOR: char = ':';

/// A line split at its first separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Trimmed property name.
    pub key: &'a str,
    /// Everything after the separator, untouched.
    pub rest: &'a str,
}

impl<'a> Declaration<'a> {
    /// Split `line` at its first `:`. Returns `None` when there is no separator.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        line.split_once(SEPARATOR).map(|(key, rest)| Self {
            key: key.trim(),
            rest,
        })
    }
}

/// Extract the property key from `line`.
///
/// Lines without a separator use the whole trimmed line as their key, so a
/// stray selector or brace still gets a stable position instead of failing
/// the whole block.
#[must_use]
pub fn extract_key(line: &str) -> &str {
    Declaration::parse(line).map_or_else(|| line.trim(), |decl| decl.key)
}

/// Strict variant of [`extract_key`].
///
/// # Errors
/// Returns [`MalformedLine`] when `line` has no `:` separator.
pub fn try_extract_key(line: &str) -> Result<&str, MalformedLine> {
    Declaration::parse(line)
        .map(|decl| decl.key)
        .ok_or_else(|| MalformedLine {
            line: line.to_string(),
        })
}

/// Map a kebab-case CSS name onto the camelCase form used by priority lists.
///
/// `margin-top` becomes `marginTop` and `-webkit-font-smoothing` becomes
/// `WebkitFontSmoothing`. Names without a hyphen and custom properties
/// (`--accent`) are returned unchanged.
#[must_use]
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if !key.contains('-') || key.starts_with("--") {
        return Cow::Borrowed(key);
    }

    let mut out = String::with_capacity(key.len());
    for (i, segment) in key.split('-').enumerate() {
        if i == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    Cow::Owned(out)
}
