use axum::Router;
use storage::Database;

pub mod athletes;
pub mod categories;
pub mod training_centers;

pub fn routes() -> Router<Database> {
    Router::new()
        .merge(categories::routes::routes())
        .merge(training_centers::routes::routes())
        .merge(athletes::routes::routes())
}
