use axum::{extract::State, Extension, Json};
use prospecta_core::{Channel, ConversationMessage, Lead, ReplyTone};
use prospecta_outreach::{
    format_conversation_history, select_messages_needing_reply, GeneratedMessage,
    OutreachRequest, ReplyRequest,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_outreach_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ReplyBody {
    pub lead: Lead,
    pub tone: ReplyTone,
    pub channel: Channel,
    /// Full thread with the lead, in any order.
    pub conversation: Vec<ConversationMessage>,
    #[serde(default)]
    pub custom_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ReplyData {
    #[serde(flatten)]
    message: GeneratedMessage,
    answered_messages: usize,
}

pub(super) async fn generate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<ApiResponse<GeneratedMessage>>, ApiError> {
    let message = state
        .composer
        .compose_outreach(&request)
        .await
        .map_err(|e| map_outreach_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: message,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn reply(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ReplyBody>,
) -> Result<Json<ApiResponse<ReplyData>>, ApiError> {
    let client_messages = select_messages_needing_reply(&body.conversation);
    if client_messages.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "no inbound messages need a reply",
        ));
    }

    let request = ReplyRequest {
        lead: body.lead,
        tone: body.tone,
        channel: body.channel,
        conversation_history: format_conversation_history(&body.conversation),
        client_messages,
        custom_context: body.custom_context,
    };
    let message = state
        .composer
        .compose_reply(&request)
        .await
        .map_err(|e| map_outreach_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: ReplyData {
            message,
            answered_messages: request.client_messages.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
