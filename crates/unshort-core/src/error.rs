use serde::Serialize;
use thiserror::Error;
use unshort_codec::CodecError;

/// Result type for extraction and resolution.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while extracting or resolving URLs.
///
/// Payloads are kept as strings so an outcome can be cloned into every
/// position of a message that repeats the same URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("url not found")]
    NotFound,
    #[error("malformed url {url}: {reason}")]
    Parse { url: String, reason: String },
    #[error("url {0} has no redirect")]
    NoRedirect(String),
    #[error("stopped after {limit} redirects")]
    TooManyRedirects { limit: usize },
    #[error("request failed: {0}")]
    Request(String),
    #[error("not a video url: {0}")]
    NotVideoUrl(String),
    #[error("no identifier in {0}")]
    MissingIdentifier(String),
    #[error("identifier codec failed: {0}")]
    Codec(#[from] CodecError),
}

impl Error {
    pub fn parse(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::Parse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
