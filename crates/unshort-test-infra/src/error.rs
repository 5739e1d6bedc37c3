use std::result::Result as StdResult;
use thiserror::Error;

/// Errors that can occur when working with the test servers.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// A type alias for `Result` with `TestInfraError`.
pub type Result<T> = StdResult<T, TestInfraError>;
