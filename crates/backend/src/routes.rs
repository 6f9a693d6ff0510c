use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::request_log::request_logger;

/// Конфигурация всех роутов приложения
///
/// Всё, что не попало в API, отдаётся из каталога витрины.
pub fn configure_routes(web_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/health", get(|| async { "ok" }))
        .route("/api/status", get(handlers::a001_product::status))
        .route("/api/products", get(handlers::a001_product::list_all))
        .route(
            "/api/products/price",
            post(handlers::a001_product::update_price),
        )
        .route(
            "/api/published/check",
            get(handlers::a001_product::check_published),
        )
        .fallback_service(ServeDir::new(web_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
