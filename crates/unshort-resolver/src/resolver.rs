use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;
use unshort_core::{Error, RedirectChain, Result, Transport};

pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Follows the redirects of `url` and returns the meaningful locations
    /// visited, starting with `url` itself.
    async fn resolve(&self, url: &str) -> Result<RedirectChain>;
}

/// Limits applied to a single resolution.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ResolverSettings {
    /// Redirects followed before giving up, counting hops that were skipped
    /// because their path did not change.
    #[builder(default = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,
    /// Upper bound on the whole walk, all hops included.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Walks redirect chains hop by hop over a [`Transport`].
///
/// A hop only extends the chain when it changes the path of the last
/// recorded location; tracking redirects that rewrite the query string or
/// bounce between hosts with the same path are followed but not recorded.
#[derive(Debug)]
pub struct ChainResolver<T> {
    transport: Arc<T>,
    settings: ResolverSettings,
}

impl<T> Clone for ChainResolver<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            settings: self.settings,
        }
    }
}

impl<T: Transport> ChainResolver<T> {
    pub fn new(transport: T, settings: ResolverSettings) -> Self {
        Self::with_shared(Arc::new(transport), settings)
    }

    /// Creates a resolver over a transport that is also used elsewhere.
    pub fn with_shared(transport: Arc<T>, settings: ResolverSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    async fn walk(&self, mut chain: RedirectChain) -> Result<RedirectChain> {
        let mut current = chain.seed().clone();
        let mut hops = 0;

        loop {
            let response = self.transport.get(&current).await?;
            let Some(location) = response.redirect_location() else {
                break;
            };

            hops += 1;
            if hops > self.settings.max_redirects {
                return Err(Error::TooManyRedirects {
                    limit: self.settings.max_redirects,
                });
            }

            let next = current
                .join(location)
                .map_err(|e| Error::parse(location, e))?;
            trace!(from = %current, to = %next, hops, "following redirect");

            chain.record(next.clone());
            current = next;
        }

        chain.into_resolved()
    }
}

#[async_trait]
impl<T: Transport> Resolver for ChainResolver<T> {
    async fn resolve(&self, url: &str) -> Result<RedirectChain> {
        trace!(url = %url, "resolving");
        let seed = RedirectChain::from_input(url)?;

        let chain = tokio::time::timeout(self.settings.timeout, self.walk(seed))
            .await
            .map_err(|_| {
                Error::Request(format!("timed out after {:?}", self.settings.timeout))
            })??;

        debug!(url = %url, len = chain.len(), last = %chain.last(), "resolved");
        Ok(chain)
    }
}
