use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("token must be {expected} characters, got {len}")]
    InvalidLength { expected: usize, len: usize },
    #[error("id {0} is outside the encodable range")]
    OutOfRange(i64),
}
