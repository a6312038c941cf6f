#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;

/// Application router backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db.run_migrations().await.expect("Failed to run migrations");
    web::app(db)
}

/// Application router with the "Elite" category and "Centro A" training center registered.
pub async fn seeded_app() -> Router {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/categorias/",
        Some(json!({ "nome": "Elite" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/centros_treinamento/",
        Some(json!({ "nome": "Centro A" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    app
}

/// Sends one request through the router and returns the status and the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).expect("Failed to serialize JSON"))
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, json)
}

pub fn athlete_payload(name: &str, cpf: &str) -> Value {
    json!({
        "nome": name,
        "cpf": cpf,
        "idade": 28,
        "peso": 60.5,
        "altura": 1.65,
        "sexo": "F",
        "categoria": { "nome": "Elite" },
        "centro_treinamento": { "nome": "Centro A" }
    })
}

pub async fn create_athlete(app: &Router, name: &str, cpf: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/atletas/",
        Some(athlete_payload(name, cpf)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body
}

pub async fn athlete_count(app: &Router) -> i64 {
    let (status, body) = send(app, Method::GET, "/atletas/", None).await;
    assert_eq!(status, StatusCode::OK);
    body["total"].as_i64().expect("total is a number")
}
