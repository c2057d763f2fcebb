use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryResponse, CreateCategoryRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::JsonBody;

use super::services;

#[utoipa::path(
    post,
    path = "/categorias/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "categorias"
)]
pub async fn create_category(
    State(db): State<Database>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}
