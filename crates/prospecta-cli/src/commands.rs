//! Command handlers. Every handler prints pretty JSON to stdout.

use std::path::Path;

use anyhow::Context;
use prospecta_core::{AppConfig, Channel, ConversationMessage, Lead, OutreachTemplate, ReplyTone};
use prospecta_niche::get_solutions;
use prospecta_outreach::{
    format_conversation_history, select_messages_needing_reply, CompletionClient,
    OutreachComposer, OutreachRequest, ProviderConfig, ReplyRequest,
};
use prospecta_scoring::{score, score_color, score_label, BusinessSignal, PlaceSnapshot};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) fn run_score(file: &Path) -> anyhow::Result<()> {
    let place: PlaceSnapshot = read_json(file)?;
    let signal = BusinessSignal::from_place(&place);
    let result = score(&signal);

    print_json(&serde_json::json!({
        "name": place.name,
        "is_chain": signal.is_chain,
        "color": score_color(result.total),
        "label": score_label(result.total),
        "result": result,
    }))
}

pub(crate) fn run_niche(category: Option<&str>) -> anyhow::Result<()> {
    let profile = get_solutions(category);
    print_json(&serde_json::json!({
        "niche": profile.key,
        "profile": profile,
    }))
}

pub(crate) async fn run_compose(
    config: &AppConfig,
    lead: &Path,
    template: OutreachTemplate,
    channel: Channel,
    context: Option<String>,
) -> anyhow::Result<()> {
    let request = OutreachRequest {
        lead: read_json(lead)?,
        template,
        channel,
        custom_context: context,
    };
    let message = composer(config)?.compose_outreach(&request).await?;
    print_json(&message)
}

pub(crate) async fn run_reply(
    config: &AppConfig,
    lead: &Path,
    conversation: &Path,
    tone: ReplyTone,
    channel: Channel,
    context: Option<String>,
) -> anyhow::Result<()> {
    let lead: Lead = read_json(lead)?;
    let conversation: Vec<ConversationMessage> = read_json(conversation)?;

    let client_messages = select_messages_needing_reply(&conversation);
    if client_messages.is_empty() {
        anyhow::bail!("no inbound messages need a reply");
    }
    tracing::info!(pending = client_messages.len(), "replying to client messages");

    let request = ReplyRequest {
        lead,
        tone,
        channel,
        client_messages,
        conversation_history: format_conversation_history(&conversation),
        custom_context: context,
    };
    let message = composer(config)?.compose_reply(&request).await?;
    print_json(&message)
}

fn composer(config: &AppConfig) -> anyhow::Result<OutreachComposer> {
    let client = CompletionClient::new(&ProviderConfig::from_app_config(config))?;
    Ok(OutreachComposer::new(client))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
