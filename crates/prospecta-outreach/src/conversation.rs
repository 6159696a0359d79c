//! Conversation helpers for reply mode.

use prospecta_core::{ConversationMessage, MessageDirection};

/// Inbound messages considered when no outbound message exists yet.
pub const UNANSWERED_FALLBACK_LIMIT: usize = 10;
/// Messages rendered by [`format_conversation_history`].
pub const HISTORY_LIMIT: usize = 20;

/// Returns the thread ordered by timestamp. Messages sharing a timestamp keep
/// their input order.
fn chronological(messages: &[ConversationMessage]) -> Vec<&ConversationMessage> {
    let mut ordered: Vec<&ConversationMessage> = messages.iter().collect();
    ordered.sort_by_key(|m| m.timestamp);
    ordered
}

/// Picks the inbound messages that still need an answer.
///
/// Returns every inbound message after the most recent outbound one, by
/// timestamp. When we have never written, returns the last
/// [`UNANSWERED_FALLBACK_LIMIT`] inbound messages. Input order does not matter.
#[must_use]
pub fn select_messages_needing_reply(messages: &[ConversationMessage]) -> Vec<String> {
    let ordered = chronological(messages);
    let last_outbound = ordered
        .iter()
        .rposition(|m| m.direction == MessageDirection::Outbound);

    let inbound = |slice: &[&ConversationMessage]| -> Vec<String> {
        slice
            .iter()
            .filter(|m| m.direction == MessageDirection::Inbound)
            .map(|m| m.content.clone())
            .collect()
    };

    match last_outbound {
        Some(index) => inbound(&ordered[index + 1..]),
        None => {
            let all = inbound(ordered.as_slice());
            let skip = all.len().saturating_sub(UNANSWERED_FALLBACK_LIMIT);
            all.into_iter().skip(skip).collect()
        }
    }
}

/// Renders the last [`HISTORY_LIMIT`] messages, oldest first, as
/// `[dd/mm HH:MM] Cliente|Nosotros: text` lines.
#[must_use]
pub fn format_conversation_history(messages: &[ConversationMessage]) -> String {
    let ordered = chronological(messages);
    let start = ordered.len().saturating_sub(HISTORY_LIMIT);
    ordered[start..]
        .iter()
        .map(|m| {
            let speaker = match m.direction {
                MessageDirection::Inbound => "Cliente",
                MessageDirection::Outbound => "Nosotros",
            };
            format!(
                "[{}] {speaker}: {}",
                m.timestamp.format("%d/%m %H:%M"),
                m.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use MessageDirection::{Inbound as In, Outbound as Out};

    fn thread(directions: &[MessageDirection]) -> Vec<ConversationMessage> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 5, 0).unwrap();
        directions
            .iter()
            .enumerate()
            .map(|(i, direction)| ConversationMessage {
                direction: *direction,
                content: format!("m{i}"),
                timestamp: start + Duration::minutes(i64::try_from(i).unwrap()),
            })
            .collect()
    }

    #[test]
    fn selects_inbound_after_last_outbound() {
        let messages = thread(&[In, Out, In, Out, In, In]);
        assert_eq!(select_messages_needing_reply(&messages), vec!["m4", "m5"]);
    }

    #[test]
    fn nothing_to_answer_after_our_last_message() {
        let messages = thread(&[In, In, Out]);
        assert!(select_messages_needing_reply(&messages).is_empty());
    }

    #[test]
    fn without_outbound_takes_last_ten_inbound() {
        let messages = thread(&[In; 14]);
        let selected = select_messages_needing_reply(&messages);
        assert_eq!(selected.len(), 10);
        assert_eq!(selected.first().map(String::as_str), Some("m4"));
        assert_eq!(selected.last().map(String::as_str), Some("m13"));
    }

    #[test]
    fn never_empty_when_inbound_follows_last_outbound() {
        let patterns: [&[MessageDirection]; 5] = [
            &[In],
            &[Out, In],
            &[In, Out, In],
            &[Out, Out, In, In],
            &[In, In, In],
        ];
        for pattern in patterns {
            let messages = thread(pattern);
            assert!(
                !select_messages_needing_reply(&messages).is_empty(),
                "{pattern:?}"
            );
        }
    }

    #[test]
    fn empty_thread_selects_nothing() {
        assert!(select_messages_needing_reply(&[]).is_empty());
    }

    #[test]
    fn newest_first_thread_is_ordered_by_timestamp() {
        let mut messages = thread(&[Out, In]);
        messages[0].content = "Hola".to_string();
        messages[1].content = "¿Y el precio?".to_string();
        messages.reverse();
        assert_eq!(select_messages_needing_reply(&messages), vec!["¿Y el precio?"]);
    }

    #[test]
    fn fallback_window_uses_latest_timestamps() {
        let mut messages = thread(&[In; 14]);
        messages.reverse();
        let selected = select_messages_needing_reply(&messages);
        assert_eq!(selected.len(), 10);
        assert_eq!(selected.first().map(String::as_str), Some("m4"));
        assert_eq!(selected.last().map(String::as_str), Some("m13"));
    }

    #[test]
    fn history_is_rendered_oldest_first() {
        let mut messages = thread(&[In, Out]);
        messages.reverse();
        assert_eq!(
            format_conversation_history(&messages),
            "[01/03 09:05] Cliente: m0\n[01/03 09:06] Nosotros: m1"
        );
    }

    #[test]
    fn history_renders_speaker_and_timestamp() {
        let messages = thread(&[In, Out]);
        assert_eq!(
            format_conversation_history(&messages),
            "[01/03 09:05] Cliente: m0\n[01/03 09:06] Nosotros: m1"
        );
    }

    #[test]
    fn history_keeps_only_last_twenty() {
        let messages = thread(&[In; 25]);
        let history = format_conversation_history(&messages);
        assert_eq!(history.lines().count(), 20);
        assert!(history.starts_with("[01/03 09:10] Cliente: m5"));
    }
}
