// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] concentric_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line range {start}:{end} is outside '{input}' ({line_count} lines)")]
    RangeOutsideInput {
        input: String,
        start: usize,
        end: usize,
        line_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
