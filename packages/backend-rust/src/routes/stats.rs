use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::response::{ok, AppError};
use crate::services::stats;
use crate::state::AppState;

pub async fn report(State(state): State<AppState>) -> Response {
    match stats::build_stats(&state).await {
        Ok(report) => ok(report),
        Err(err) => {
            tracing::warn!(error = %err, "stats report failed");
            AppError::internal(err.to_string()).into_response()
        }
    }
}
