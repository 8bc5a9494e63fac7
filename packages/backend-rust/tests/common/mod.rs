#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use wordjet_backend::dictionary::Dictionary;
use wordjet_backend::state::AppState;
use wordjet_backend::store::{MemoryTallyStore, TallyStore};

pub const TEST_WORDS: [&str; 3] = ["a", "b", "c"];

pub fn test_state(store: Arc<dyn TallyStore>) -> AppState {
    AppState::new(Dictionary::from_words(TEST_WORDS), store).with_quiz_seed(Some(7))
}

pub fn create_test_app(store: Arc<dyn TallyStore>) -> Router {
    wordjet_backend::create_app(test_state(store), None)
}

pub fn memory_app() -> (Router, Arc<MemoryTallyStore>) {
    let store = Arc::new(MemoryTallyStore::new());
    (create_test_app(store.clone()), store)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
