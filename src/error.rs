/// Error types for the gallery
///
/// Network errors never reach the UI: the fetcher and the thumbnail
/// loader log them and turn them into actions. Config errors are logged
/// at startup and replaced by defaults.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The image URL does not contain an `/id/{id}/` segment
    #[error("malformed image reference: {0}")]
    MalformedReference(String),

    /// Transport, timeout or JSON decoding failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
