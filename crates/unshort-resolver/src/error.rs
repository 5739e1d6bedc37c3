use thiserror::Error;

/// Errors raised while building the HTTP stack at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid proxy url {url}: {reason}")]
    InvalidProxy { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
