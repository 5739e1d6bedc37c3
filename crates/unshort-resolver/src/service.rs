use crate::resolver::Resolver;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use unshort_core::{
    find_urls, Error, Report, ReportEntry, ResolutionOutcome, Result, VideoIdentifier,
};
use url::Url;

/// Turns a chat message into a [`Report`] of where its links really go.
#[derive(Debug)]
pub struct ReverseService<R> {
    resolver: Arc<R>,
    identifier: VideoIdentifier,
}

impl<R> Clone for ReverseService<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            identifier: self.identifier,
        }
    }
}

impl<R: Resolver> ReverseService<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_identifier(resolver, VideoIdentifier::default())
    }

    pub fn with_identifier(resolver: R, identifier: VideoIdentifier) -> Self {
        Self {
            resolver: Arc::new(resolver),
            identifier,
        }
    }

    /// Extracts every URL from `text`, resolves them concurrently and pairs
    /// video links with their numeric id.
    ///
    /// The id is looked up on the last hop of a resolved chain, or on the URL
    /// itself when it could not be resolved.
    ///
    /// # Returns
    ///
    /// * `Ok(report)` - One entry per URL, in the order they appear in `text`
    /// * `Err(Error::NotFound)` - If `text` contains no URL
    ///
    /// Failures of individual URLs never fail the call; they show up as
    /// failed entries.
    pub async fn reverse_short_url(&self, text: &str) -> Result<Report> {
        let urls = find_urls(text)?;
        let outcomes = self.resolve_urls(&urls).await;

        let entries = urls
            .into_iter()
            .zip(outcomes)
            .map(|(url, outcome)| {
                // a link that did not redirect may still be a video page
                let target = match outcome.chain() {
                    Some(chain) => Some(chain.last().clone()),
                    None => Url::parse(&url).ok(),
                };
                let identifier = target.and_then(|target| match self.identifier.identify(&target) {
                    Ok(pair) => Some(pair),
                    Err(e) => {
                        debug!(url = %target, error = %e, "no video identifier");
                        None
                    }
                });
                ReportEntry {
                    url,
                    outcome,
                    identifier,
                }
            })
            .collect();

        Ok(Report::new(entries))
    }

    /// Resolves every URL concurrently and returns one outcome per input, in
    /// input order.
    ///
    /// Each distinct URL is resolved exactly once by its own task; repeated
    /// URLs share that task's outcome.
    pub async fn resolve_urls(&self, urls: &[String]) -> Vec<ResolutionOutcome> {
        let mut slots: HashMap<&str, usize> = HashMap::with_capacity(urls.len());
        let mut distinct: Vec<&str> = Vec::with_capacity(urls.len());
        let positions: Vec<usize> = urls
            .iter()
            .map(|url| {
                *slots.entry(url.as_str()).or_insert_with(|| {
                    distinct.push(url.as_str());
                    distinct.len() - 1
                })
            })
            .collect();

        let tasks = distinct.iter().map(|url| {
            let resolver = Arc::clone(&self.resolver);
            let url = url.to_string();
            tokio::spawn(async move { resolver.resolve(&url).await })
        });
        let joined = join_all(tasks).await;

        let outcomes: Vec<ResolutionOutcome> = joined
            .into_iter()
            .zip(&distinct)
            .map(|(result, url)| match result {
                Ok(Ok(chain)) => ResolutionOutcome::Resolved { chain },
                Ok(Err(error)) => {
                    warn!(url = %url, error = %error, "resolution failed");
                    ResolutionOutcome::Failed { error }
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "resolution task aborted");
                    ResolutionOutcome::Failed {
                        error: Error::Request(format!("resolution task aborted: {e}")),
                    }
                }
            })
            .collect();

        positions
            .into_iter()
            .map(|slot| outcomes[slot].clone())
            .collect()
    }
}
