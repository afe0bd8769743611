use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod domain;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod storage;
pub mod utils;

use crate::domain::PersonRepository;

/// Shared handler state: the persistence handle, constructed once at startup
/// and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PersonRepository>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "person-service", description = "person-service API"),
    paths(
        handlers::greet,
        handlers::calculate,
        handlers::create_person,
        handlers::get_person,
    ),
    components(schemas(dtos::Greeting, dtos::CalculateResult, dtos::PersonDto))
)]
struct ApiDoc;

/// The REST routes, without the documentation or CORS layers. Tests drive
/// this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/greet/{name}", get(handlers::greet))
        .route("/calculate", post(handlers::calculate))
        .route("/person/", post(handlers::create_person))
        .route("/person/{person_id}", get(handlers::get_person))
        .with_state(state)
}

pub fn default_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Starts the web server.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let app = router(state).merge(swagger).layer(default_cors_layer());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let address = format!("{host}:{port}");

    tracing::info!("🚀 Server running at http://{address}");
    tracing::info!("📚 Swagger UI available at http://{address}/swagger-ui");

    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
