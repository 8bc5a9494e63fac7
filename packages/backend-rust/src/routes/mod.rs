mod answers;
mod health;
mod stats;
mod words;

use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::response::AppError;
use crate::state::AppState;

/// API routes; with `static_dir` set, unmatched paths are served from disk
/// (front-end page, favicon) instead of the JSON 404.
pub fn router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let app = Router::new()
        .route("/words", get(words::quiz_batch))
        .route("/response", post(answers::submit))
        .route("/stats", get(stats::report))
        .route("/health", get(health::health));

    let app = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static files");
            app.fallback_service(ServeDir::new(dir))
        }
        None => app.fallback(fallback_handler),
    };

    app.with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("route not found").into_response()
}
