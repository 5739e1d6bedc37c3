use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use unshort_core::{Error, HopResponse, Result, Transport};
use url::Url;

/// How a [`StaticTransport`] answers a request for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A final response with the given status.
    Status(u16),
    /// A redirect to `location`, which may be relative.
    Redirect { status: u16, location: String },
    /// A transport failure, as if the connection broke.
    Fail(String),
}

#[derive(Debug, Clone)]
struct Entry {
    route: Route,
    delay: Option<Duration>,
}

/// In-memory [`Transport`] that answers from a fixed route table.
///
/// URLs without a route fail like an unreachable host. Routes can be added
/// through a shared reference, so one table can be populated while clones of
/// an `Arc` to it are already in use.
#[derive(Debug, Default)]
pub struct StaticTransport {
    routes: DashMap<String, Entry>,
    requests: DashMap<String, usize>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, url: &str, route: Route) -> &Self {
        self.insert(url, route, None)
    }

    /// Like [`route`](Self::route), but waits `delay` before answering.
    pub fn route_delayed(&self, url: &str, route: Route, delay: Duration) -> &Self {
        self.insert(url, route, Some(delay))
    }

    /// Answers `from` with a `302 Found` pointing at `to`.
    pub fn redirect(&self, from: &str, to: &str) -> &Self {
        self.route(
            from,
            Route::Redirect {
                status: 302,
                location: to.to_string(),
            },
        )
    }

    /// Answers `url` with a final `status`.
    pub fn respond(&self, url: &str, status: u16) -> &Self {
        self.route(url, Route::Status(status))
    }

    /// Number of requests received for `url`.
    pub fn requests(&self, url: &str) -> usize {
        self.requests.get(&normalize(url)).map_or(0, |count| *count)
    }

    fn insert(&self, url: &str, route: Route, delay: Option<Duration>) -> &Self {
        self.routes.insert(normalize(url), Entry { route, delay });
        self
    }
}

fn normalize(url: &str) -> String {
    Url::parse(url)
        .map(String::from)
        .unwrap_or_else(|_| url.to_string())
}

#[async_trait]
impl Transport for StaticTransport {
    async fn get(&self, url: &Url) -> Result<HopResponse> {
        *self.requests.entry(url.to_string()).or_insert(0) += 1;

        // clone out of the map so no shard lock is held across the delay
        let entry = self
            .routes
            .get(url.as_str())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::Request(format!("no route to {url}")))?;

        if let Some(delay) = entry.delay {
            tokio::time::sleep(delay).await;
        }

        match entry.route {
            Route::Status(status) => Ok(HopResponse::new(status, None)),
            Route::Redirect { status, location } => Ok(HopResponse::new(status, Some(location))),
            Route::Fail(reason) => Err(Error::Request(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn answers_from_route_table() {
        let transport = StaticTransport::new();
        transport
            .redirect("https://x.co/a", "/b")
            .respond("https://x.co/b", 200);

        let hop = transport.get(&url("https://x.co/a")).await.unwrap();
        assert_eq!(hop.redirect_location(), Some("/b"));
        let hop = transport.get(&url("https://x.co/b")).await.unwrap();
        assert_eq!(hop, HopResponse::new(200, None));
    }

    #[tokio::test]
    async fn unknown_url_is_request_error() {
        let transport = StaticTransport::new();
        let result = transport.get(&url("https://nowhere.example/")).await;
        assert!(matches!(result, Err(Error::Request(_))));
    }

    #[tokio::test]
    async fn routes_are_normalized() {
        let transport = StaticTransport::new();
        transport.respond("https://x.co", 204);
        let hop = transport.get(&url("https://x.co/")).await.unwrap();
        assert_eq!(hop.status, 204);
        assert_eq!(transport.requests("https://x.co"), 1);
    }

    #[tokio::test]
    async fn fail_route_is_request_error() {
        let transport = StaticTransport::new();
        transport.route("https://x.co/a", Route::Fail("connection reset".into()));
        let result = transport.get(&url("https://x.co/a")).await;
        assert_eq!(result, Err(Error::Request("connection reset".into())));
    }
}
