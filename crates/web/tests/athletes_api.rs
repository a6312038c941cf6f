mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{athlete_count, athlete_payload, create_athlete, seeded_app, send};

#[tokio::test]
async fn create_echoes_fields_and_references() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/atletas/",
        Some(athlete_payload("Ana", "12345678900")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| uuid::Uuid::parse_str(id).is_ok()));
    assert!(body["created_at"].is_string());
    assert_eq!(body["nome"], "Ana");
    assert_eq!(body["cpf"], "12345678900");
    assert_eq!(body["idade"], 28);
    assert_eq!(body["peso"], 60.5);
    assert_eq!(body["altura"], 1.65);
    assert_eq!(body["sexo"], "F");
    assert_eq!(body["categoria"], json!({ "nome": "Elite" }));
    assert_eq!(body["centro_treinamento"], json!({ "nome": "Centro A" }));
}

#[tokio::test]
async fn create_without_trailing_slash_is_routed() {
    let app = seeded_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/atletas",
        Some(athlete_payload("Ana", "12345678900")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_with_unknown_category_persists_nothing() {
    let app = seeded_app().await;
    let before = athlete_count(&app).await;

    let mut payload = athlete_payload("Ana", "12345678900");
    payload["categoria"] = json!({ "nome": "Iniciante" });
    let (status, body) = send(&app, Method::POST, "/atletas/", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Categoria não encontrada.");
    assert_eq!(athlete_count(&app).await, before);
}

#[tokio::test]
async fn create_with_unknown_training_center_persists_nothing() {
    let app = seeded_app().await;

    let mut payload = athlete_payload("Ana", "12345678900");
    payload["centro_treinamento"] = json!({ "nome": "Centro Z" });
    let (status, body) = send(&app, Method::POST, "/atletas/", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Centro de treinamento não encontrado.");
    assert_eq!(athlete_count(&app).await, 0);
}

#[tokio::test]
async fn duplicate_cpf_conflicts_and_keeps_one_row() {
    let app = seeded_app().await;
    create_athlete(&app, "Ana", "12345678900").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/atletas/",
        Some(athlete_payload("Beatriz", "12345678900")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Já existe um atleta cadastrado com o cpf: 12345678900"
    );
    assert_eq!(athlete_count(&app).await, 1);
}

#[tokio::test]
async fn invalid_payload_is_rejected_with_details() {
    let app = seeded_app().await;

    let mut payload = athlete_payload("Ana", "123");
    payload["peso"] = json!(-1.0);
    let (status, body) = send(&app, Method::POST, "/atletas/", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let details: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d.as_str())
        .collect();
    assert!(details.iter().any(|d| d.starts_with("cpf:")));
    assert!(details.iter().any(|d| d.starts_with("peso:")));
    assert_eq!(athlete_count(&app).await, 0);
}

#[tokio::test]
async fn missing_field_is_a_json_bad_request() {
    let app = seeded_app().await;

    let mut payload = athlete_payload("Ana", "12345678900");
    payload.as_object_mut().unwrap().remove("cpf");
    let (status, body) = send(&app, Method::POST, "/atletas/", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("cpf")));
    assert_eq!(athlete_count(&app).await, 0);
}

#[tokio::test]
async fn mistyped_field_is_a_json_bad_request() {
    let app = seeded_app().await;

    let mut payload = athlete_payload("Ana", "12345678900");
    payload["idade"] = json!("x");
    let (status, body) = send(&app, Method::POST, "/atletas/", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("idade")));
}

#[tokio::test]
async fn patch_with_mistyped_field_is_a_json_bad_request() {
    let app = seeded_app().await;
    let created = create_athlete(&app, "Ana", "12345678900").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/atletas/{id}"),
        Some(json!({ "peso": "pesado" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_returns_created_fields() {
    let app = seeded_app().await;
    let created = create_athlete(&app, "Ana", "12345678900").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/atletas/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = seeded_app().await;
    let id = uuid::Uuid::new_v4();

    let (status, body) = send(&app, Method::GET, &format!("/atletas/{id}"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Atleta não encontrado no id: {id}"));
}

#[tokio::test]
async fn get_malformed_id_is_bad_request() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/atletas/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn patch_changes_only_sent_fields() {
    let app = seeded_app().await;
    let created = create_athlete(&app, "Ana", "12345678900").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/atletas/{id}"),
        Some(json!({ "peso": 80 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["peso"], 80.0);
    assert_eq!(body["nome"], "Ana");
    assert_eq!(body["idade"], 28);
    assert_eq!(body["categoria"], json!({ "nome": "Elite" }));
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["created_at"], created["created_at"]);

    let (_, reloaded) = send(&app, Method::GET, &format!("/atletas/{id}"), None).await;
    assert_eq!(reloaded, body);
}

#[tokio::test]
async fn patch_ignores_category_changes() {
    let app = seeded_app().await;
    let created = create_athlete(&app, "Ana", "12345678900").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/atletas/{id}"),
        Some(json!({ "categoria": { "nome": "Outra" }, "idade": 30 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["idade"], 30);
    assert_eq!(body["categoria"], json!({ "nome": "Elite" }));
}

#[tokio::test]
async fn patch_unknown_id_is_not_found() {
    let app = seeded_app().await;
    let id = uuid::Uuid::new_v4();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/atletas/{id}"),
        Some(json!({ "peso": 80 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_to_taken_cpf_conflicts() {
    let app = seeded_app().await;
    create_athlete(&app, "Ana", "12345678900").await;
    let other = create_athlete(&app, "Bia", "98765432100").await;
    let id = other["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/atletas/{id}"),
        Some(json!({ "cpf": "12345678900" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = seeded_app().await;
    let created = create_athlete(&app, "Ana", "12345678900").await;
    let uri = format!("/atletas/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_by_name_substring_case_insensitively() {
    let app = seeded_app().await;
    create_athlete(&app, "Ana Souza", "11111111111").await;
    create_athlete(&app, "Mariana", "22222222222").await;
    create_athlete(&app, "Carlos", "33333333333").await;

    let (status, body) = send(&app, Method::GET, "/atletas/?nome=aNa", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(
        body["items"],
        json!([
            { "nome": "Ana Souza", "categoria": "Elite", "centro_treinamento": "Centro A" },
            { "nome": "Mariana", "categoria": "Elite", "centro_treinamento": "Centro A" }
        ])
    );
}

#[tokio::test]
async fn list_filters_by_exact_cpf() {
    let app = seeded_app().await;
    create_athlete(&app, "Ana", "11111111111").await;
    create_athlete(&app, "Bia", "22222222222").await;

    let (_, body) = send(&app, Method::GET, "/atletas/?cpf=22222222222", None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["nome"], "Bia");

    let (_, body) = send(&app, Method::GET, "/atletas/?cpf=2222222222", None).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn list_paginates_with_metadata() {
    let app = seeded_app().await;
    for (i, name) in ["Ana", "Bia", "Caio", "Davi", "Eva"].iter().enumerate() {
        create_athlete(&app, name, &format!("{:011}", i + 1)).await;
    }

    let (status, body) = send(&app, Method::GET, "/atletas/?page=3&size=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 3);
    assert_eq!(body["size"], 2);
    assert_eq!(body["pages"], 3);
    assert_eq!(
        body["items"],
        json!([{ "nome": "Eva", "categoria": "Elite", "centro_treinamento": "Centro A" }])
    );
}

#[tokio::test]
async fn list_rejects_invalid_page_size() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/atletas/?size=500", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "size must be between 1 and 100");
}

#[tokio::test]
async fn list_rejects_non_numeric_page() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/atletas/?page=abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("query")));
}

#[tokio::test]
async fn list_treats_whitespace_name_as_a_filter() {
    let app = seeded_app().await;
    create_athlete(&app, "Ana Souza", "11111111111").await;
    create_athlete(&app, "Carlos", "22222222222").await;

    let (_, body) = send(&app, Method::GET, "/atletas/?nome=%20", None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["nome"], "Ana Souza");

    let (_, body) = send(&app, Method::GET, "/atletas/?nome=", None).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn list_name_filter_matches_accented_names() {
    let app = seeded_app().await;
    create_athlete(&app, "ÉRICA", "11111111111").await;

    let (status, body) = send(&app, Method::GET, "/atletas/?nome=%C3%A9rica", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["nome"], "ÉRICA");
}
