pub mod health;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

/// `get` would also answer HEAD; the health route is GET only.
async fn get_only() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

/// Route table. Anything not listed falls through to axum's default 404 / 405.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler).head(get_only))
        .layer(TraceLayer::new_for_http())
}
