use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Line range {start}..={end} is outside the document ({line_count} lines)")]
    InvalidRange {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("Line {line_number} has no ':' separator: {line:?}")]
    MalformedLine { line_number: usize, line: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
