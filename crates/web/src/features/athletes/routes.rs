use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete,
};

pub fn routes() -> Router<Database> {
    // Collection is served with and without the trailing slash.
    Router::new()
        .route("/atletas/", post(create_athlete).get(list_athletes))
        .route("/atletas", post(create_athlete).get(list_athletes))
        .route(
            "/atletas/:id",
            get(get_athlete).patch(update_athlete).delete(delete_athlete),
        )
}
