//! Handlers for talks nested under a camp.
//!
//! Every unexpected storage fault on this resource, reads and writes alike,
//! is reported as `500 "Failed to get Talks!"`.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};

use crate::api::dto::TalkModel;
use crate::api::extract::{TalkPath, ValidatedJson};
use crate::api::links;
use crate::domain::entities::TalkDraft;
use crate::error::AppError;
use crate::state::AppState;

const FAILURE: &str = "Failed to get Talks!";

fn mask(error: AppError) -> AppError {
    error.masked(FAILURE)
}

/// Lists the talks of a camp, speakers included.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}/talks`
///
/// An unknown moniker yields an empty array.
pub async fn list_talks_handler(
    Path(moniker): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TalkModel>>, AppError> {
    let talks = state.talk_service.list_talks(&moniker).await.map_err(mask)?;

    Ok(Json(talks.into_iter().map(TalkModel::from).collect()))
}

/// Returns one talk with its speaker.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}/talks/{id}`
pub async fn get_talk_handler(
    TalkPath { moniker, talk_id }: TalkPath,
    State(state): State<AppState>,
) -> Result<Json<TalkModel>, AppError> {
    let talk = state
        .talk_service
        .get_talk(&moniker, talk_id)
        .await
        .map_err(mask)?;

    Ok(Json(talk.into()))
}

/// Creates a talk in the camp and attaches the requested speaker.
///
/// # Endpoint
///
/// `POST /api/camps/{moniker}/talks`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Building APIs",
///   "abstract": "A tour of REST design with real examples.",
///   "level": 200,
///   "speaker": { "speakerId": 1 }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 if the camp or the speaker does not exist.
/// Returns 400 if the speaker is missing or validation fails.
pub async fn create_talk_handler(
    Path(moniker): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(model): ValidatedJson<TalkModel>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TalkModel>), AppError> {
    let talk = state
        .talk_service
        .create_talk(&moniker, TalkDraft::from(model))
        .await
        .map_err(mask)?;

    let location = links::talk_location(&moniker, talk.talk_id)
        .ok_or_else(|| AppError::rejected("Could not use current moniker!"))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(talk.into()),
    ))
}

/// Overwrites title, abstract and level; swaps the speaker only when the
/// body names an existing one.
///
/// # Endpoint
///
/// `PUT /api/camps/{moniker}/talks/{id}`
pub async fn update_talk_handler(
    TalkPath { moniker, talk_id }: TalkPath,
    State(state): State<AppState>,
    ValidatedJson(model): ValidatedJson<TalkModel>,
) -> Result<Json<TalkModel>, AppError> {
    let talk = state
        .talk_service
        .update_talk(&moniker, talk_id, TalkDraft::from(model))
        .await
        .map_err(mask)?;

    Ok(Json(talk.into()))
}

/// `DELETE /api/camps/{moniker}/talks/{id}`
pub async fn delete_talk_handler(
    TalkPath { moniker, talk_id }: TalkPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .talk_service
        .delete_talk(&moniker, talk_id)
        .await
        .map_err(mask)?;

    Ok(StatusCode::OK)
}
