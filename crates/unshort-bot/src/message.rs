use serde::Deserialize;

const COMMAND_PREFIX: char = '/';

/// An incoming chat message.
///
/// Media messages carry their text in `caption` and leave `text` empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl ChatMessage {
    /// Wraps a raw line of text as message `id`.
    pub fn plain(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
            caption: None,
        }
    }

    /// Parses one JSON-encoded message, e.g. `{"id": 42, "text": "..."}`.
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    /// The text worth scanning for links, if any.
    ///
    /// Commands (messages whose very first character is `/`) are left alone.
    /// An empty text falls back to the caption.
    pub fn content(&self) -> Option<&str> {
        let raw = self.text.as_deref().unwrap_or_default();
        if raw.starts_with(COMMAND_PREFIX) {
            return None;
        }
        let text = raw.trim();
        if !text.is_empty() {
            return Some(text);
        }

        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|caption| !caption.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_content() {
        let message = ChatMessage::plain(1, " see b23.tv/abc ");
        assert_eq!(message.content(), Some("see b23.tv/abc"));
    }

    #[test]
    fn commands_are_skipped() {
        assert_eq!(ChatMessage::plain(1, "/start").content(), None);
        assert_eq!(ChatMessage::plain(1, "/help b23.tv/abc").content(), None);
    }

    #[test]
    fn only_a_leading_slash_marks_a_command() {
        let message = ChatMessage::plain(1, " /cmd x.co");
        assert_eq!(message.content(), Some("/cmd x.co"));
    }

    #[test]
    fn empty_text_falls_back_to_caption() {
        let message = ChatMessage {
            id: 3,
            text: Some(String::new()),
            caption: Some("b23.tv/abc".to_string()),
        };
        assert_eq!(message.content(), Some("b23.tv/abc"));

        let message = ChatMessage {
            id: 4,
            text: None,
            caption: Some("  ".to_string()),
        };
        assert_eq!(message.content(), None);
    }

    #[test]
    fn parses_json_lines() {
        let message = ChatMessage::from_json(r#"{"id": 42, "caption": "x.com/a"}"#).unwrap();
        assert_eq!(message.id, 42);
        assert_eq!(message.text, None);
        assert_eq!(message.content(), Some("x.com/a"));

        assert!(ChatMessage::from_json(r#"{"text": "no id"}"#).is_err());
        assert!(ChatMessage::from_json("not json").is_err());
    }
}
