use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::JsonBody;

use super::services;

#[utoipa::path(
    post,
    path = "/centros_treinamento/",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    JsonBody(req): JsonBody<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TrainingCenterResponse::from(center))).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "centros_treinamento"
)]
pub async fn list_training_centers(
    State(db): State<Database>,
) -> Result<Json<Vec<TrainingCenterResponse>>, WebError> {
    let centers = services::list_training_centers(db.pool()).await?;

    let response: Vec<TrainingCenterResponse> = centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "centros_treinamento"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(db.pool(), id).await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}
