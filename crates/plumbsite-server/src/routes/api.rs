use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

pub const CHAT_REPLY: &str = "Thank you for your message. Our team will get back to you shortly. \
For immediate assistance, please call our emergency line.";

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    environment: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatReply {
    reply: &'static str,
}

pub(super) async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                environment: state.config.env.to_string(),
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

/// Acknowledges a chat message with a canned reply; nothing is forwarded.
pub(super) async fn chat(
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "message must not be empty",
        ));
    }

    tracing::info!(chars = message.chars().count(), "chat message received");
    Ok(Json(ApiResponse {
        data: ChatReply { reply: CHAT_REPLY },
        meta: ResponseMeta::new(req_id.0),
    }))
}
