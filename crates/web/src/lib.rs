use axum::{Router, routing::get};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
mod extract;
mod features;

use features::{athletes, categories, health, training_centers};

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::create_athlete,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        categories::handlers::create_category,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        training_centers::handlers::create_training_center,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        health::health_check,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummary,
            storage::dto::athlete::NameRef,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
        )
    ),
    tags(
        (name = "atletas", description = "Athlete registration endpoints"),
        (name = "categorias", description = "Category lookup endpoints"),
        (name = "centros_treinamento", description = "Training center lookup endpoints"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the application router with all resources, API docs and middleware.
pub fn app(db: Database) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(athletes::routes::routes())
        .merge(categories::routes::routes())
        .merge(training_centers::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
