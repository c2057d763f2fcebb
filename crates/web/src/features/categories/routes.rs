use axum::{Router, routing::post};
use storage::Database;

use super::handlers::create_category;

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/categorias/", post(create_category))
        .route("/categorias", post(create_category))
}
