//! Handlers for the camps resource.
//!
//! Unexpected storage faults are reported as `500 "Database Failure!"`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
};
use serde_json::json;

use crate::api::dto::date_format::parse_date;
use crate::api::dto::{CampModel, IncludeTalksQuery, SearchQuery};
use crate::api::extract::ValidatedJson;
use crate::api::links;
use crate::domain::entities::{CampDraft, default_event_date};
use crate::error::AppError;
use crate::state::AppState;

const FAILURE: &str = "Database Failure!";

fn mask(error: AppError) -> AppError {
    error.masked(FAILURE)
}

/// Lists every camp, newest first.
///
/// # Endpoint
///
/// `GET /api/camps?includeTalks=false`
///
/// Talks (with their speakers) are only loaded when `includeTalks=true`;
/// otherwise every camp carries `"talks": []`.
pub async fn list_camps_handler(
    State(state): State<AppState>,
    Query(query): Query<IncludeTalksQuery>,
) -> Result<Json<Vec<CampModel>>, AppError> {
    let camps = state
        .camp_service
        .list_camps(query.include_talks)
        .await
        .map_err(mask)?;

    Ok(Json(camps.into_iter().map(CampModel::from).collect()))
}

/// Returns one camp by moniker.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}?includeTalks=false`
///
/// # Errors
///
/// Returns 404 with an empty body if no camp has this moniker.
pub async fn get_camp_handler(
    Path(moniker): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<IncludeTalksQuery>,
) -> Result<Json<CampModel>, AppError> {
    let camp = state
        .camp_service
        .get_camp(&moniker, query.include_talks)
        .await
        .map_err(mask)?;

    Ok(Json(camp.into()))
}

/// Returns the camps held on the calendar day of `theDate`.
///
/// # Endpoint
///
/// `GET /api/camps/search?theDate=2018-10-18&includeTalks=false`
///
/// # Errors
///
/// Returns 400 if `theDate` cannot be parsed.
/// Returns 404 with an empty body when nothing matches.
pub async fn search_camps_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CampModel>>, AppError> {
    let date = match query.the_date.as_deref() {
        Some(raw) => parse_date(raw).map_err(|e| {
            AppError::validation(
                "One or more validation errors occurred.",
                json!({ "theDate": [e.to_string()] }),
            )
        })?,
        None => default_event_date().date(),
    };

    let camps = state
        .camp_service
        .search_by_date(date, query.include_talks)
        .await
        .map_err(mask)?;

    Ok(Json(camps.into_iter().map(CampModel::from).collect()))
}

/// Creates a camp.
///
/// # Endpoint
///
/// `POST /api/camps`
///
/// # Response
///
/// `201 Created` with `Location: /api/camps/{moniker}` and the stored camp.
///
/// # Errors
///
/// Returns 400 if validation fails, the moniker is taken, or nothing was
/// persisted.
pub async fn create_camp_handler(
    State(state): State<AppState>,
    ValidatedJson(model): ValidatedJson<CampModel>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CampModel>), AppError> {
    state
        .camp_service
        .ensure_moniker_available(&model.moniker)
        .await
        .map_err(mask)?;

    let location = links::camp_location(&model.moniker)
        .ok_or_else(|| AppError::rejected("Could not use current moniker!"))?;

    let camp = state
        .camp_service
        .create_camp(CampDraft::from(model))
        .await
        .map_err(mask)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(camp.into()),
    ))
}

/// Overwrites a camp with the request body.
///
/// # Endpoint
///
/// `PUT /api/camps/{moniker}`
///
/// # Errors
///
/// Returns 404 if the camp does not exist.
/// Returns 400 with an empty body if nothing changed.
pub async fn update_camp_handler(
    Path(moniker): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(model): ValidatedJson<CampModel>,
) -> Result<Json<CampModel>, AppError> {
    let camp = state
        .camp_service
        .update_camp(&moniker, CampDraft::from(model))
        .await
        .map_err(mask)?;

    Ok(Json(camp.into()))
}

/// Deletes a camp and, through storage, its talks.
///
/// # Endpoint
///
/// `DELETE /api/camps/{moniker}`
pub async fn delete_camp_handler(
    Path(moniker): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .camp_service
        .delete_camp(&moniker)
        .await
        .map_err(mask)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{CampService, TalkService};
    use crate::domain::repositories::{
        MockCampRepository, MockSpeakerRepository, MockTalkRepository,
    };
    use axum::{
        Router,
        routing::get,
    };
    use axum_test::TestServer;
    use std::sync::Arc;

    fn failing_state() -> AppState {
        let mut camps = MockCampRepository::new();
        camps
            .expect_list_camps()
            .returning(|_| Err(AppError::internal("Database error", json!({"query": "camps"}))));
        camps
            .expect_find_camp()
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let camps: Arc<dyn crate::domain::repositories::CampRepository> = Arc::new(camps);
        AppState::new(
            Arc::new(CampService::new(camps.clone())),
            Arc::new(TalkService::new(
                camps,
                Arc::new(MockTalkRepository::new()),
                Arc::new(MockSpeakerRepository::new()),
            )),
        )
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/api/camps", get(list_camps_handler).post(create_camp_handler))
            .route("/api/camps/{moniker}", get(get_camp_handler))
            .with_state(failing_state());

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_list_fault_is_masked() {
        let response = server().get("/api/camps").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Database Failure!");
        assert_eq!(json["error"]["details"], json!({}));
    }

    #[tokio::test]
    async fn test_get_fault_is_masked() {
        let response = server().get("/api/camps/ATL2018").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Database Failure!");
    }

    #[tokio::test]
    async fn test_create_fault_is_masked() {
        let response = server()
            .post("/api/camps")
            .json(&json!({ "name": "Code Camp 2024", "moniker": "cc2024" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "internal_error");
        assert_eq!(json["error"]["message"], "Database Failure!");
    }
}
