use prospecta_core::Channel;
use serde::Serialize;

const SUBJECT_DELIMITER: &str = "---";

/// A composed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMessage {
    pub content: String,
    /// Email subject; always `None` for WhatsApp.
    pub subject: Option<String>,
    pub tokens_used: Option<u32>,
}

/// Splits raw provider text into content and subject.
///
/// For email the text before the first `---` is the subject and everything
/// after it is the body, later delimiters included. Without a delimiter the
/// whole text is the body. WhatsApp text is only trimmed.
#[must_use]
pub fn parse_response(raw: &str, channel: Channel) -> GeneratedMessage {
    let (subject, content) = match channel {
        Channel::Email => match raw.split_once(SUBJECT_DELIMITER) {
            Some((subject, body)) => (Some(subject.trim().to_string()), body.trim().to_string()),
            None => (None, raw.trim().to_string()),
        },
        Channel::Whatsapp => (None, raw.trim().to_string()),
    };
    GeneratedMessage {
        content,
        subject,
        tokens_used: None,
    }
}
