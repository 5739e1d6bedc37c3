//! Core types for reversing short URLs.
//!
//! This crate holds the pieces shared by the resolver service and the bot:
//! URL extraction, redirect chains and their outcomes, the transport trait
//! the resolver is generic over, video identifier lookup and the report
//! value handed back to the chat glue.

pub mod chain;
pub mod error;
pub mod extractor;
pub mod identifier;
pub mod outcome;
pub mod report;
mod tld;
pub mod transport;

pub use chain::RedirectChain;
pub use error::{Error, Result};
pub use extractor::find_urls;
pub use identifier::VideoIdentifier;
pub use outcome::ResolutionOutcome;
pub use report::{Report, ReportEntry};
pub use transport::{HopResponse, Transport};
