use serde::Serialize;
use unshort_core::Report;

/// The answer to one chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub reply_to: i64,
    pub report: Report,
}

impl Reply {
    pub fn new(reply_to: i64, report: Report) -> Self {
        Self { reply_to, report }
    }

    /// The chat text of the reply.
    pub fn to_text(&self) -> String {
        self.report.to_string()
    }

    /// The reply as a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
