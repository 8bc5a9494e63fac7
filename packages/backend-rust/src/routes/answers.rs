use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::response::{ok, AppError};
use crate::services::answers::{self as answer_service, AnswerError};
use crate::state::AppState;

/// Exactly `{"word": string, "correct": bool}`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerRequest {
    word: String,
    correct: bool,
}

pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected answer submission");
            return AppError::bad_request("INVALID_REQUEST", "invalid request format")
                .into_response();
        }
    };

    match answer_service::record_answer(&state, &request.word, request.correct).await {
        Ok(recorded) => ok(recorded),
        Err(AnswerError::UnknownWord(word)) => {
            AppError::bad_request("UNKNOWN_WORD", format!("unknown word {word}")).into_response()
        }
        Err(err @ AnswerError::Store(_)) => {
            tracing::warn!(error = %err, word = %request.word, "record answer failed");
            AppError::internal(err.to_string()).into_response()
        }
    }
}
