use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::response::{ok, AppError};
use crate::services::quiz;
use crate::state::AppState;

pub async fn quiz_batch(State(state): State<AppState>) -> Response {
    match quiz::build_quiz(&state).await {
        Ok(words) => ok(words),
        Err(err) => {
            tracing::warn!(error = %err, "quiz batch failed");
            AppError::internal(err.to_string()).into_response()
        }
    }
}
