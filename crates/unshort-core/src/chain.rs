use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use tracing::trace;
use url::Url;

/// The meaningful locations visited while resolving one URL.
///
/// The first entry is always the URL the resolution started from, kept as it
/// was written. Every later entry has a different path than the entry before
/// it; redirects that only touch the query string, fragment or host are not
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectChain {
    input: String,
    seed: Url,
    locations: Vec<Url>,
}

impl RedirectChain {
    pub fn new(seed: Url) -> Self {
        Self {
            input: seed.to_string(),
            seed,
            locations: Vec::new(),
        }
    }

    /// Parses `input` and starts a chain from it, keeping the raw text for
    /// display.
    pub fn from_input(input: &str) -> Result<Self> {
        let seed = Url::parse(input).map_err(|e| Error::parse(input, e))?;
        Ok(Self {
            input: input.to_string(),
            seed,
            locations: Vec::new(),
        })
    }

    /// The URL the chain started from, as it was written.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The parsed form of [`input`](Self::input).
    pub fn seed(&self) -> &Url {
        &self.seed
    }

    /// The most recently recorded location.
    pub fn last(&self) -> &Url {
        self.locations.last().unwrap_or(&self.seed)
    }

    /// Records `location` if its path differs from the last recorded entry.
    ///
    /// Returns whether the chain grew.
    pub fn record(&mut self, location: Url) -> bool {
        if location.path() == self.last().path() {
            trace!(url = %location, path = location.path(), "path unchanged, hop not recorded");
            return false;
        }
        self.locations.push(location);
        true
    }

    pub fn len(&self) -> usize {
        1 + self.locations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Url> {
        std::iter::once(&self.seed).chain(self.locations.iter())
    }

    /// Locations recorded after the seed.
    pub fn locations(&self) -> &[Url] {
        &self.locations
    }

    /// Finishes the walk, failing with [`Error::NoRedirect`] if nothing but the
    /// seed was recorded.
    pub fn into_resolved(self) -> Result<Self> {
        if self.locations.is_empty() {
            return Err(Error::NoRedirect(self.input));
        }
        Ok(self)
    }
}

impl Serialize for RedirectChain {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rest = self.locations.iter().map(Url::as_str);
        serializer.collect_seq(std::iter::once(self.input.as_str()).chain(rest))
    }
}
