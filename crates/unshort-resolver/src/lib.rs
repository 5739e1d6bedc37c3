//! Short URL resolution.
//!
//! This crate provides a [`ChainResolver`] that follows redirect chains over a
//! pluggable [`Transport`](unshort_core::Transport), and a [`ReverseService`]
//! that resolves every link of a chat message concurrently.
//!
//! # Example
//!
//! ```rust,no_run
//! use unshort_resolver::{ChainResolver, HttpTransport, ResolverSettings, ReverseService, TransportSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(
//!     TransportSettings::builder()
//!         .proxy("socks5://127.0.0.1:1080")
//!         .build(),
//! )?;
//! let resolver = ChainResolver::new(transport, ResolverSettings::default());
//! let service = ReverseService::new(resolver);
//!
//! let report = service.reverse_short_url("look: https://b23.tv/xxxxx").await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod resolver;
pub mod service;
pub mod transport;

pub use error::SetupError;
pub use resolver::{ChainResolver, Resolver, ResolverSettings};
pub use service::ReverseService;
pub use transport::{HttpTransport, Route, StaticTransport, TransportSettings};
