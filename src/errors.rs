use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid video data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Video number {index} is out of range (1 to {len})")]
    InvalidIndex { index: i64, len: usize },

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),
}
