mod common;

use axum::http::{StatusCode, header};
use serde_json::{Value, json};

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_camps_without_talks() {
    let server = common::make_server();

    let response = server.get("/api/camps").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let camps = json.as_array().unwrap();
    assert_eq!(camps.len(), 1);
    assert_eq!(camps[0]["moniker"], "ATL2018");
    assert_eq!(camps[0]["venueName"], "Atlanta Convention Center");
    assert_eq!(camps[0]["talks"], json!([]));
}

#[tokio::test]
async fn test_list_camps_with_talks() {
    let server = common::make_server();

    let response = server
        .get("/api/camps")
        .add_query_param("includeTalks", true)
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let talks = json[0]["talks"].as_array().unwrap();
    assert_eq!(talks.len(), 2);
    assert_eq!(talks[0]["title"], "Entity Framework From Scratch");
    assert_eq!(talks[0]["speaker"]["firstName"], "Shawn");
}

#[tokio::test]
async fn test_get_camp_by_moniker() {
    let server = common::make_server();

    let response = server.get("/api/camps/ATL2018").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Atlanta Code Camp");
    assert_eq!(json["eventDate"], "2018-10-18T00:00:00");
    assert_eq!(json["length"], 1);
    assert_eq!(json["stateProvince"], "GA");
}

#[tokio::test]
async fn test_get_camp_not_found_has_empty_body() {
    let server = common::make_server();

    let response = server.get("/api/camps/NOPE").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let server = common::make_server();

    server.get("/api/camps/").await.assert_status_ok();
    server.get("/api/camps/ATL2018/").await.assert_status_ok();
}

// ─── SEARCH ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_by_date_matches_calendar_day() {
    let server = common::make_server();

    let response = server
        .get("/api/camps/search")
        .add_query_param("theDate", "2018-10-18T15:45:00")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["moniker"], "ATL2018");
    assert_eq!(json[0]["talks"], json!([]));
}

#[tokio::test]
async fn test_search_without_matches_is_not_found() {
    let server = common::make_server();

    let response = server
        .get("/api/camps/search")
        .add_query_param("theDate", "2019-01-01")
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_search_without_date_looks_for_year_one() {
    let server = common::make_server();

    server
        .post("/api/camps")
        .json(&json!({ "name": "Undated", "moniker": "UNDATED" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/camps/search").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["moniker"], "UNDATED");
}

#[tokio::test]
async fn test_search_with_invalid_date() {
    let server = common::make_server();

    let response = server
        .get("/api/camps/search")
        .add_query_param("theDate", "not-a-date")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["theDate"].is_array());
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_camp_then_get_returns_same_model() {
    let server = common::make_server();

    let response = server
        .post("/api/camps")
        .json(&json!({ "name": "Code Camp 2024", "moniker": "cc2024", "length": 2 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header(header::LOCATION), "/api/camps/cc2024");
    let created = response.json::<Value>();
    assert_eq!(created["name"], "Code Camp 2024");
    assert_eq!(created["length"], 2);
    assert_eq!(created["eventDate"], "0001-01-01T00:00:00");

    let fetched = server.get("/api/camps/cc2024").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_create_duplicate_moniker_is_rejected() {
    let server = common::make_server();

    let response = server
        .post("/api/camps")
        .json(&common::camp_body("Another Atlanta", "ATL2018"))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Moniker already exists!");
}

#[tokio::test]
async fn test_create_ignores_incoming_talks() {
    let server = common::make_server();

    let mut body = common::camp_body("Portland Camp", "PDX2024");
    body["talks"] = json!([{ "title": "Sneaky", "abstract": "Should never be stored here." }]);

    let response = server.post("/api/camps").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["talks"], json!([]));

    let talks = server.get("/api/camps/PDX2024/talks").await;
    assert_eq!(talks.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = common::make_server();

    let response = server
        .post("/api/camps")
        .json(&json!({ "name": "", "moniker": "x", "length": 0 }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["name"][0], "The Name field is required.");
    assert!(json["error"]["details"]["length"].is_array());
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/api/camps")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_camp_overwrites_fields() {
    let server = common::make_server();

    let mut body = common::camp_body("Atlanta Code Camp 2018", "ATL2018");
    body["length"] = json!(3);

    let response = server.put("/api/camps/ATL2018").json(&body).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Atlanta Code Camp 2018");
    assert_eq!(json["length"], 3);
    assert_eq!(json["cityTown"], "Portland");
    // Fields absent from the body are overwritten too.
    assert_eq!(json["stateProvince"], Value::Null);

    // Talks stay attached to the camp.
    let talks = server.get("/api/camps/ATL2018/talks").await;
    assert_eq!(talks.json::<Value>().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_camp_can_change_moniker() {
    let server = common::make_server();

    let mut camp = server.get("/api/camps/ATL2018").await.json::<Value>();
    camp["moniker"] = json!("ATL-2018");

    server
        .put("/api/camps/ATL2018")
        .json(&camp)
        .await
        .assert_status_ok();

    server.get("/api/camps/ATL2018").await.assert_status_not_found();
    server.get("/api/camps/ATL-2018").await.assert_status_ok();
}

#[tokio::test]
async fn test_update_missing_camp() {
    let server = common::make_server();

    let response = server
        .put("/api/camps/NOPE")
        .json(&common::camp_body("Nope", "NOPE"))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Camp with this moniker doesn't exists!"
    );
}

#[tokio::test]
async fn test_update_without_changes_is_bad_request() {
    let server = common::make_server();

    let camp = server.get("/api/camps/ATL2018").await.json::<Value>();

    let response = server.put("/api/camps/ATL2018").json(&camp).await;

    response.assert_status_bad_request();
    assert!(response.text().is_empty());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_camp() {
    let server = common::make_server();

    let response = server.delete("/api/camps/ATL2018").await;

    response.assert_status_ok();
    assert!(response.text().is_empty());

    server.get("/api/camps/ATL2018").await.assert_status_not_found();
    server
        .get("/api/camps/ATL2018/talks/1")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_missing_camp() {
    let server = common::make_server();

    let response = server.delete("/api/camps/NOPE").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Camp with this moniker doesn't exists!"
    );
}
