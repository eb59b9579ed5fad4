//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, QR-encoder, and image errors, and provides semantic
//! variants for URL validation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {url}. Make sure it starts with http:// or https://")]
    InvalidUrl { url: String },

    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Image write error: {0}")]
    Image(#[from] image::ImageError),
}
