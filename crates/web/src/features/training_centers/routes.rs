use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_training_center, get_training_center, list_training_centers};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/centros_treinamento/",
            post(create_training_center).get(list_training_centers),
        )
        .route(
            "/centros_treinamento",
            post(create_training_center).get(list_training_centers),
        )
        .route("/centros_treinamento/:id", get(get_training_center))
}
