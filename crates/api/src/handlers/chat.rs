//! Free-text chat relay.
//!
//! Forwards the message to the local model server and returns its text
//! verbatim. A bare greeting is answered by a scripted reply without
//! contacting the model. Every turn is independent; no conversation
//! state is kept server-side.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

const GREETING_REPLY: &str = "Hi there! I can help you find accommodation or food services near your university. Try asking something like \"PG near IIT Bombay under 8000\" or \"mess with veg food\".";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/v1/chat
pub async fn chat(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> Response {
    if payload.message.trim().eq_ignore_ascii_case("hi") {
        return Json(json!({ "ok": true, "reply": GREETING_REPLY })).into_response();
    }

    match state.ollama.generate(&payload.message).await {
        Ok(reply) => Json(json!({ "ok": true, "reply": reply })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "model backend request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "reply": "⚠️ LLaMA backend error." })),
            )
                .into_response()
        }
    }
}
