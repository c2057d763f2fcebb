//! Training center and category integration tests.

mod common;

use axum::http::{Method, StatusCode};
use common::{app, send};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_category(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, Method::POST, "/categorias/", Some(json!({"nome": "RX"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nome"], "RX");
    assert!(body["id"].is_string());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_list_and_get_training_centers(pool: PgPool) {
    let app = app(pool);
    let center = json!({
        "nome": "CT King",
        "endereco": "Rua X, Q02",
        "proprietario": "Marcos"
    });

    let (status, created) = send(&app, Method::POST, "/centros_treinamento/", Some(center.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["endereco"], "Rua X, Q02");

    // Repeated names are allowed.
    let (status, _) = send(&app, Method::POST, "/centros_treinamento/", Some(center)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send(&app, Method::GET, "/centros_treinamento/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/centros_treinamento/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_unknown_training_center_is_not_found(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(
        &app,
        Method::GET,
        "/centros_treinamento/3f2504e0-4f89-11d3-9a0c-0305e82c3301",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Centro de treinamento não encontrado no id: 3f2504e0-4f89-11d3-9a0c-0305e82c3301"
    );
}
