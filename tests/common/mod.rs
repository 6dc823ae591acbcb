#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use code_camp::infrastructure::persistence::InMemoryCampStore;
use code_camp::routes::app_router;
use code_camp::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

/// State over a fresh in-memory store holding the `ATL2018` sample camp.
pub fn create_test_state() -> AppState {
    AppState::from_store(Arc::new(InMemoryCampStore::with_sample_data()))
}

/// Full application (trailing-slash normalization, tracing, `/api` nesting).
pub fn make_server() -> TestServer {
    let app = app_router(create_test_state());
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn camp_body(name: &str, moniker: &str) -> Value {
    json!({
        "name": name,
        "moniker": moniker,
        "eventDate": "2024-05-04T00:00:00",
        "length": 2,
        "venueName": "Community Center",
        "cityTown": "Portland",
        "country": "USA"
    })
}

pub fn talk_body(title: &str, speaker_id: Option<i64>) -> Value {
    let mut body = json!({
        "title": title,
        "abstract": "A long enough abstract for validation.",
        "level": 300
    });
    if let Some(id) = speaker_id {
        body["speaker"] = json!({ "speakerId": id });
    }
    body
}
