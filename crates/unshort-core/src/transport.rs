use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// The response to a single GET, reduced to what redirect following needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopResponse {
    pub status: u16,
    pub location: Option<String>,
}

impl HopResponse {
    pub fn new(status: u16, location: Option<String>) -> Self {
        Self { status, location }
    }

    /// Returns the `Location` target if this response asks to be followed.
    ///
    /// A redirect status without a `Location` header ends the walk, same as any
    /// other final response.
    pub fn redirect_location(&self) -> Option<&str> {
        match self.status {
            301 | 302 | 303 | 307 | 308 => self.location.as_deref(),
            _ => None,
        }
    }
}

/// An HTTP client that issues one request per call and never follows redirects
/// on its own.
///
/// Implementations can be backed by a real HTTP stack or by in-memory fixtures.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Issues a GET for `url`.
    ///
    /// Network and timeout failures map to [`Error::Request`](crate::Error::Request).
    async fn get(&self, url: &Url) -> Result<HopResponse>;
}
