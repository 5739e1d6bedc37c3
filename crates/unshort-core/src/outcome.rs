use crate::chain::RedirectChain;
use crate::error::{Error, Result};
use serde::Serialize;

/// What happened to one extracted URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Resolved { chain: RedirectChain },
    Failed { error: Error },
}

impl ResolutionOutcome {
    pub fn chain(&self) -> Option<&RedirectChain> {
        match self {
            ResolutionOutcome::Resolved { chain } => Some(chain),
            ResolutionOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            ResolutionOutcome::Resolved { .. } => None,
            ResolutionOutcome::Failed { error } => Some(error),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionOutcome::Resolved { .. })
    }
}

impl From<Result<RedirectChain>> for ResolutionOutcome {
    fn from(result: Result<RedirectChain>) -> Self {
        match result {
            Ok(chain) => ResolutionOutcome::Resolved { chain },
            Err(error) => ResolutionOutcome::Failed { error },
        }
    }
}
