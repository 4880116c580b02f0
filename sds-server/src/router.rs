use axum::http::uri::PathAndQuery;
use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/endpoint", get(api::endpoint::routing_reliability))
        .route("/healthcheck", get(health_check))
        .route("/health", get(health_check))
        .route("/version", get(version_info))
        .route("/status", get(api::admin::get_status))
        .route("/cache", delete(api::admin::invalidate_cache))
        .with_state(state)
        .layer(middleware::from_fn(lowercase_path))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Route matching is case-insensitive on the path: `/EndPoint` serves the
/// same handler as `/endpoint`. Directory keys live in the query string,
/// which is passed through untouched.
async fn lowercase_path(mut request: Request, next: Next) -> Response {
    let uri = request.uri();
    if uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        let lowered = uri.path().to_ascii_lowercase();
        let path_and_query = match uri.query() {
            Some(query) => format!("{lowered}?{query}"),
            None => lowered,
        };
        let mut parts = uri.clone().into_parts();
        if let Ok(path_and_query) = path_and_query.parse::<PathAndQuery>() {
            parts.path_and_query = Some(path_and_query);
            if let Ok(new_uri) = Uri::from_parts(parts) {
                *request.uri_mut() = new_uri;
            }
        }
    }
    next.run(request).await
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
