use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        athlete::{
            AthleteFilter, AthleteListResponse, AthleteResponse, CreateAthleteRequest,
            UpdateAthleteRequest,
        },
        common::PaginatedResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::JsonBody;

use super::services;

#[utoipa::path(
    post,
    path = "/atletas/",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 303, description = "An athlete with this cpf already exists"),
        (status = 400, description = "Category or training center not found"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Failed to store the athlete")
    ),
    tag = "atletas"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    JsonBody(req): JsonBody<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/",
    params(AthleteFilter),
    responses(
        (status = 200, description = "Page of matching athletes", body = PaginatedResponse<AthleteListResponse>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 404, description = "No athlete matches the filter")
    ),
    tag = "atletas"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(filter): Query<AthleteFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let page = services::list_athletes(db.pool(), &filter).await?;

    let response: PaginatedResponse<AthleteListResponse> =
        PaginatedResponse::from_page(page, &filter.pagination());

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    patch,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 404, description = "Athlete not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "atletas"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    JsonBody(update_req): JsonBody<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_athlete(db.pool(), id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
