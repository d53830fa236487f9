use crate::handlers::{
    catalog::{get_diseases, get_regions},
    forecast::get_forecast,
    health::health_check,
    overview::get_overview,
    series::get_series,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Selection catalog
        .route("/api/v1/regions", get(get_regions))
        .route("/api/v1/diseases", get(get_diseases))
        // Series, forecast and overview
        .route("/api/v1/series", get(get_series))
        .route("/api/v1/forecast", get(get_forecast))
        .route("/api/v1/overview", get(get_overview))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
