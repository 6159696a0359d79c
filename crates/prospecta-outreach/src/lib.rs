//! AI-assisted outreach message composition.
//!
//! Builds a natural-language brief from a lead, its web-probability score and
//! its niche profile, submits it to a chat-completion provider and parses the
//! reply into a ready-to-send message. Cold outreach and replies inside an
//! ongoing conversation are both supported.

pub mod client;
pub mod compose;
pub mod context;
pub mod conversation;
pub mod error;
pub mod parse;
pub mod prompts;

pub use client::{ChatMessage, ChatRole, Completion, CompletionClient, ProviderConfig};
pub use compose::{OutreachComposer, OutreachRequest, ReplyRequest};
pub use conversation::{format_conversation_history, select_messages_needing_reply};
pub use error::OutreachError;
pub use parse::{parse_response, GeneratedMessage};
