use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::competition::{
        AthleteCompetitionEntry, CompetitionResponse, CreateCompetitionRequest,
        EventCompetitionEntry, UpdateCompetitionRequest,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/athletes/{athlete_id}",
    params(
        ("athlete_id" = i64, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Competition entries for the athlete", body = Vec<AthleteCompetitionEntry>),
        (status = 404, description = "Athlete not found")
    ),
    tag = "competitions"
)]
pub async fn list_by_athlete(
    State(db): State<Database>,
    Path(athlete_id): Path<i64>,
) -> Result<Response, WebError> {
    let rows = services::list_by_athlete(db.pool(), athlete_id).await?;

    let response: Vec<AthleteCompetitionEntry> =
        rows.into_iter().map(AthleteCompetitionEntry::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Participants of the event", body = Vec<EventCompetitionEntry>),
        (status = 404, description = "Event not found")
    ),
    tag = "competitions"
)]
pub async fn list_by_event(
    State(db): State<Database>,
    Path(event_id): Path<i64>,
) -> Result<Response, WebError> {
    let rows = services::list_by_event(db.pool(), event_id).await?;

    let response: Vec<EventCompetitionEntry> =
        rows.into_iter().map(EventCompetitionEntry::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CreateCompetitionRequest,
    responses(
        (status = 201, description = "Competition entry created successfully", body = CompetitionResponse),
        (status = 400, description = "Missing required fields: athlete_id and event_id")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(db): State<Database>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::create_competition(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CompetitionResponse::from(entry))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/competitions/{id}",
    params(
        ("id" = i64, Path, description = "Competition entry ID")
    ),
    request_body = UpdateCompetitionRequest,
    responses(
        (status = 200, description = "Competition entry updated successfully", body = CompetitionResponse),
        (status = 404, description = "Competition entry not found")
    ),
    tag = "competitions"
)]
pub async fn update_competition(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_competition(db.pool(), id, &req).await?;

    Ok(Json(CompetitionResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{id}",
    params(
        ("id" = i64, Path, description = "Competition entry ID")
    ),
    responses(
        (status = 200, description = "Competition entry deleted successfully"),
        (status = 404, description = "Competition entry not found")
    ),
    tag = "competitions"
)]
pub async fn delete_competition(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_competition(db.pool(), id).await?;

    Ok(Json(json!({"message": "Competition record deleted successfully"})).into_response())
}
