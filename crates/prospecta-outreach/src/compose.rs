use chrono::Utc;
use prospecta_core::{Channel, Lead, OutreachTemplate, ReplyTone};
use prospecta_niche::get_solutions;
use serde::Deserialize;

use crate::client::{ChatMessage, CompletionClient};
use crate::context::build_brief;
use crate::error::OutreachError;
use crate::parse::{parse_response, GeneratedMessage};
use crate::prompts::{outreach_user_prompt, reply_user_prompt, system_prompt, PromptMode};

/// Cold outreach to a lead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutreachRequest {
    pub lead: Lead,
    pub template: OutreachTemplate,
    pub channel: Channel,
    #[serde(default)]
    pub custom_context: Option<String>,
}

/// Reply inside an ongoing conversation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplyRequest {
    pub lead: Lead,
    pub tone: ReplyTone,
    pub channel: Channel,
    /// Client messages to answer, oldest first. Must not be empty.
    pub client_messages: Vec<String>,
    /// Pre-rendered transcript, see [`crate::format_conversation_history`].
    #[serde(default)]
    pub conversation_history: String,
    #[serde(default)]
    pub custom_context: Option<String>,
}

/// Composes outreach messages through a [`CompletionClient`].
pub struct OutreachComposer {
    client: CompletionClient,
}

impl OutreachComposer {
    #[must_use]
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Writes a first-contact or follow-up message for `request.lead`.
    ///
    /// # Errors
    ///
    /// Propagates [`CompletionClient::complete`] failures unchanged.
    pub async fn compose_outreach(
        &self,
        request: &OutreachRequest,
    ) -> Result<GeneratedMessage, OutreachError> {
        let profile = get_solutions(request.lead.category.as_deref());
        let brief = build_brief(
            &request.lead,
            profile,
            request.custom_context.as_deref(),
            Utc::now(),
        );
        let messages = [
            ChatMessage::system(system_prompt(
                PromptMode::Outreach(request.template),
                request.channel,
            )),
            ChatMessage::user(outreach_user_prompt(&brief, request.channel)),
        ];

        tracing::debug!(
            lead = %request.lead.name,
            niche = profile.key,
            template = %request.template,
            channel = %request.channel,
            "composing outreach message"
        );
        self.generate(&messages, request.channel, "outreach").await
    }

    /// Writes a reply to the pending client messages.
    ///
    /// # Errors
    ///
    /// Returns [`OutreachError::Validation`] without contacting the provider
    /// when `client_messages` has no non-blank entry. Blank entries are
    /// dropped from the prompt. Otherwise propagates
    /// [`CompletionClient::complete`] failures unchanged.
    pub async fn compose_reply(
        &self,
        request: &ReplyRequest,
    ) -> Result<GeneratedMessage, OutreachError> {
        let pending: Vec<String> = request
            .client_messages
            .iter()
            .filter(|m| !m.trim().is_empty())
            .cloned()
            .collect();
        if pending.is_empty() {
            return Err(OutreachError::Validation(
                "client_messages must contain at least one message to reply to".to_string(),
            ));
        }

        let profile = get_solutions(request.lead.category.as_deref());
        let brief = build_brief(
            &request.lead,
            profile,
            request.custom_context.as_deref(),
            Utc::now(),
        );
        let messages = [
            ChatMessage::system(system_prompt(PromptMode::Reply(request.tone), request.channel)),
            ChatMessage::user(reply_user_prompt(
                &brief,
                &request.conversation_history,
                &pending,
                request.channel,
            )),
        ];

        tracing::debug!(
            lead = %request.lead.name,
            niche = profile.key,
            tone = %request.tone,
            channel = %request.channel,
            pending = pending.len(),
            "composing reply"
        );
        self.generate(&messages, request.channel, "reply").await
    }

    async fn generate(
        &self,
        messages: &[ChatMessage],
        channel: Channel,
        mode: &'static str,
    ) -> Result<GeneratedMessage, OutreachError> {
        let completion = match self.client.complete(messages).await {
            Ok(completion) => completion,
            Err(e) => {
                tracing::warn!(mode, channel = %channel, error = %e, "message generation failed");
                return Err(e);
            }
        };

        tracing::info!(
            mode,
            channel = %channel,
            model = self.client.model(),
            tokens_used = completion.tokens_used,
            "message generated"
        );

        let mut message = parse_response(&completion.text, channel);
        message.tokens_used = completion.tokens_used;
        Ok(message)
    }
}
