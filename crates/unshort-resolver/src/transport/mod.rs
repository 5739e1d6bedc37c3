//! [`Transport`](unshort_core::Transport) implementations.

pub mod http;
pub mod memory;

pub use http::{HttpTransport, TransportSettings};
pub use memory::{Route, StaticTransport};
