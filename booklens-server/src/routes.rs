//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// CORS policy from BOOKLENS_CORS_ORIGINS ("*" or a comma-separated list)
fn cors_layer() -> CorsLayer {
    let origins = match std::env::var("BOOKLENS_CORS_ORIGINS").ok() {
        Some(origins) if origins.trim() == "*" => AllowOrigin::any(),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            AllowOrigin::list(allowed)
        }
        // Default: allow localhost origins for development
        None => AllowOrigin::list(DEV_ORIGINS.map(HeaderValue::from_static)),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Discovery endpoints
        .route("/featured", get(handlers::featured_books))
        .route("/search", get(handlers::search_books))
        .route("/sessions", get(handlers::browse_sessions))
        .route("/books/:id", get(handlers::get_book))
        .route("/categories/:category", get(handlers::books_by_category))
        .route("/authors/:author", get(handlers::books_by_author))
        // Preferences
        .route(
            "/preferences",
            get(handlers::get_preferences).put(handlers::replace_preferences),
        )
        .route("/preferences/genres/:genre", post(handlers::toggle_genre));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
