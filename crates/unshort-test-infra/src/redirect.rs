use crate::Result;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, TypedBuilder)]
pub struct RedirectConfig {
    /// Status used for every redirect mounted on the server.
    #[builder(default = 302)]
    status: u16,
    /// Delay added to every response.
    #[builder(default, setter(strip_option))]
    delay: Option<Duration>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Test fixture for a local HTTP server that answers with scripted redirects.
pub struct RedirectServer {
    server: MockServer,
    config: RedirectConfig,
}

impl RedirectServer {
    /// Starts a server with the default config (`302 Found`, no delay).
    pub async fn start() -> Self {
        Self::with_config(RedirectConfig::default()).await
    }

    pub async fn with_config(config: RedirectConfig) -> Self {
        Self {
            server: MockServer::start().await,
            config,
        }
    }

    /// Absolute URL of `path` on this server.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.server.uri())?.join(path)?)
    }

    /// Answers GET `from` with a redirect to `to`, which may be relative or
    /// point at another host.
    pub async fn redirect(&self, from: &str, to: &str) {
        Mock::given(method("GET"))
            .and(path(from))
            .respond_with(self.template(self.config.status).insert_header("Location", to))
            .mount(&self.server)
            .await;
    }

    /// Answers GET `at` with a final `status`.
    pub async fn respond(&self, at: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(self.template(status))
            .mount(&self.server)
            .await;
    }

    /// Mounts `paths[0] -> paths[1] -> ... -> paths[n-1]` and lets the last
    /// path answer `200 OK`.
    pub async fn chain(&self, paths: &[&str]) {
        for pair in paths.windows(2) {
            self.redirect(pair[0], pair[1]).await;
        }
        if let Some(last) = paths.last() {
            self.respond(last, 200).await;
        }
    }

    /// Number of requests the server has received so far.
    pub async fn received(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Returns the underlying mock server, for mounting custom matchers.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    fn template(&self, status: u16) -> ResponseTemplate {
        let template = ResponseTemplate::new(status);
        match self.config.delay {
            Some(delay) => template.set_delay(delay),
            None => template,
        }
    }
}
