use crate::message::ChatMessage;
use crate::reply::Reply;
use tracing::{debug, warn};
use unshort_core::Error;
use unshort_resolver::{Resolver, ReverseService};

/// Answers a single message, or returns `None` when there is nothing to say.
pub async fn answer<R: Resolver>(service: &ReverseService<R>, message: &ChatMessage) -> Option<Reply> {
    let Some(text) = message.content() else {
        debug!(message_id = message.id, "skipping message without content");
        return None;
    };

    match service.reverse_short_url(text).await {
        Ok(report) => {
            debug!(
                message_id = message.id,
                urls = report.len(),
                resolved = report.resolved_count(),
                "message resolved"
            );
            Some(Reply::new(message.id, report))
        }
        Err(Error::NotFound) => {
            debug!(message_id = message.id, "no url in message");
            None
        }
        Err(e) => {
            warn!(message_id = message.id, error = %e, "failed to handle message");
            None
        }
    }
}
