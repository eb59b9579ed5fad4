use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Box size must be greater than 0, got: {size}")]
    ZeroBoxSize { size: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
