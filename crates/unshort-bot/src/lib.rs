//! Chat glue for the `unshort` binary: incoming messages, replies and the
//! handler that connects them to a [`ReverseService`](unshort_resolver::ReverseService).

pub mod handler;
pub mod message;
pub mod reply;

pub use handler::answer;
pub use message::ChatMessage;
pub use reply::Reply;
