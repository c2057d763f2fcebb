use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod extract;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::categories::handlers::create_category,
        features::training_centers::handlers::create_training_center,
        features::training_centers::handlers::list_training_centers,
        features::training_centers::handlers::get_training_center,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteListResponse,
            storage::dto::athlete::CategoryRef,
            storage::dto::athlete::TrainingCenterRef,
            storage::dto::common::PaginationMeta,
        )
    ),
    tags(
        (name = "categorias", description = "Category endpoints"),
        (name = "centros_treinamento", description = "Training center endpoints"),
        (name = "atletas", description = "Athlete endpoints"),
    )
)]
pub struct ApiDoc;

/// Full application router with state applied.
pub fn app(db: Database) -> Router {
    Router::new()
        .merge(features::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
