//! Demo assistant endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use diverga_assistant::{AssistantReply, AssistantRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Successful reply: `{success: true, response, agentId, model, tScore, demo}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DivergaResponse {
    pub success: bool,
    #[serde(flatten)]
    pub reply: AssistantReply,
}

/// `POST /api/diverga`
///
/// Body rejections are answered with the same JSON error shape as
/// assistant failures.
pub async fn diverga(
    State(state): State<AppState>,
    payload: Result<Json<AssistantRequest>, JsonRejection>,
) -> Result<Json<DivergaResponse>, ApiError> {
    let Json(request) = payload?;

    info!(
        agent_id = %request.agent_id,
        command = %request.command,
        demo = state.assistant.is_demo(),
        "Assistant request"
    );

    let reply = state.assistant.respond(&request).await?;

    Ok(Json(DivergaResponse {
        success: true,
        reply,
    }))
}
