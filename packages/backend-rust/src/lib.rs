pub mod config;
pub mod dictionary;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use std::path::PathBuf;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_app(state: AppState, static_dir: Option<PathBuf>) -> axum::Router {
    routes::router(state, static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
