use crate::error::SetupError;
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::{info, trace};
use typed_builder::TypedBuilder;
use unshort_core::{Error, HopResponse, Result, Transport};
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_USER_AGENT: &str = concat!("unshort/", env!("CARGO_PKG_VERSION"));

const PROXY_SCHEMES: [&str; 4] = ["http", "https", "socks5", "socks5h"];

/// Configures the HTTP client behind [`HttpTransport`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct TransportSettings {
    /// Upstream proxy, e.g. `http://127.0.0.1:8080` or `socks5://127.0.0.1:1080`.
    #[builder(default, setter(strip_option, into))]
    pub proxy: Option<String>,
    /// Timeout applied to every single request.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub timeout: Duration,
    #[builder(default = DEFAULT_USER_AGENT.to_string(), setter(into))]
    pub user_agent: String,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A [`Transport`] backed by reqwest with automatic redirects turned off, so
/// every hop is handed back to the resolver.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(settings: TransportSettings) -> std::result::Result<Self, SetupError> {
        let mut builder = Client::builder()
            .redirect(Policy::none())
            .timeout(settings.timeout)
            .user_agent(settings.user_agent);

        if let Some(proxy) = settings.proxy.as_deref() {
            builder = builder.proxy(parse_proxy(proxy)?);
            info!(proxy = %proxy, "routing requests through proxy");
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn parse_proxy(raw: &str) -> std::result::Result<Proxy, SetupError> {
    let invalid = |reason: String| SetupError::InvalidProxy {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !PROXY_SCHEMES.contains(&url.scheme()) {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Proxy::all(url.as_str()).map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<HopResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let location = match response.headers().get(LOCATION) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|e| Error::parse(url.as_str(), format!("bad location header: {e}")))?
                    .to_string(),
            ),
            None => None,
        };

        trace!(url = %url, status, location = ?location, "received response");
        Ok(HopResponse::new(status, location))
    }
}
