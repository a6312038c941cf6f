use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath};

use super::services;

#[utoipa::path(
    post,
    path = "/centros_treinamento/",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A training center with this name already exists")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(center)).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "centros_treinamento"
)]
pub async fn list_training_centers(State(db): State<Database>) -> Result<Response, WebError> {
    let centers = services::list_training_centers(&db).await?;

    Ok(Json(centers).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamento/{id}",
    params(
        ("id" = i32, Path, description = "Training center ID")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "centros_treinamento"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(&db, id).await?;

    Ok(Json(center).into_response())
}
