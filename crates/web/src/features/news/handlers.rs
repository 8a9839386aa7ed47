use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::news::{CreateNewsRequest, NewsResponse, UpdateNewsRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "List all news items successfully", body = Vec<NewsResponse>)
    ),
    tag = "news"
)]
pub async fn list_news(State(db): State<Database>) -> Result<Response, WebError> {
    let news = services::list_news(db.pool()).await?;

    let response: Vec<NewsResponse> = news.into_iter().map(NewsResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(
        ("id" = i64, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "News item found", body = NewsResponse),
        (status = 404, description = "News item not found")
    ),
    tag = "news"
)]
pub async fn get_news(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let news = services::get_news(db.pool(), id).await?;

    Ok(Json(NewsResponse::from(news)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "News item created successfully", body = NewsResponse),
        (status = 400, description = "Missing required fields")
    ),
    tag = "news"
)]
pub async fn create_news(
    State(db): State<Database>,
    Json(req): Json<CreateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let news = services::create_news(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(NewsResponse::from(news))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(
        ("id" = i64, Path, description = "News ID")
    ),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "News item updated successfully", body = NewsResponse),
        (status = 400, description = "No fields provided for update"),
        (status = 404, description = "News item not found")
    ),
    tag = "news"
)]
pub async fn update_news(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    if req.is_empty() {
        return Err(WebError::BadRequest(
            "No fields provided for update".to_string(),
        ));
    }

    let updated = services::update_news(db.pool(), id, &req).await?;

    Ok(Json(NewsResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(
        ("id" = i64, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "News item deleted successfully"),
        (status = 404, description = "News item not found")
    ),
    tag = "news"
)]
pub async fn delete_news(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_news(db.pool(), id).await?;

    Ok(Json(json!({"message": "News item deleted successfully"})).into_response())
}
