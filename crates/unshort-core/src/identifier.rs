use crate::error::{Error, Result};
use unshort_codec::{BvidCodec, IdentifierPair};
use url::Url;

/// Host whose video pages carry a `BV` token in their path.
pub const VIDEO_HOST: &str = "www.bilibili.com";
/// Prefix that marks the token segment of a video path.
pub const TOKEN_PREFIX: &str = "BV";

/// Pulls the `BV` token out of a video page URL and pairs it with its numeric id.
#[derive(Debug, Clone, Copy)]
pub struct VideoIdentifier {
    codec: BvidCodec,
    host: &'static str,
}

impl Default for VideoIdentifier {
    fn default() -> Self {
        Self::new(BvidCodec::new())
    }
}

impl VideoIdentifier {
    pub fn new(codec: BvidCodec) -> Self {
        Self {
            codec,
            host: VIDEO_HOST,
        }
    }

    pub fn identify(&self, url: &Url) -> Result<IdentifierPair> {
        if url.host_str() != Some(self.host) {
            return Err(Error::NotVideoUrl(url.to_string()));
        }

        let token = url
            .path_segments()
            .into_iter()
            .flatten()
            .find(|segment| segment.starts_with(TOKEN_PREFIX))
            .ok_or_else(|| Error::MissingIdentifier(url.to_string()))?;

        Ok(self.codec.identify(token)?)
    }
}
