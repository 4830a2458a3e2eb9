// crates/core/src/error.rs
use alloc::string::String;
use thiserror::Error;

/// A line that carries no `:` separator and therefore no property key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line has no ':' separator: {line:?}")]
pub struct MalformedLine {
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Malformed(#[from] MalformedLine),

    #[error("Priority list is empty")]
    EmptyPriorityList,
}

pub type Result<T> = core::result::Result<T, CoreError>;
