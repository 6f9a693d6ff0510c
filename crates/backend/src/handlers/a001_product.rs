use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_product::dto::{ErrorResponse, ProductsResponse, StatusResponse};
use contracts::usecases::u501_update_price::{UpdatePriceRequest, UpdatePriceResponse};
use contracts::usecases::u502_check_published::PublishedCheckResponse;

use crate::domain::a001_product::service;
use crate::usecases::u501_update_price::{self, UpdatePriceError};
use crate::usecases::u502_check_published::{self, CheckPublishedError};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl std::fmt::Display) -> ApiError {
    (
        status,
        Json(ErrorResponse::new(error.to_string(), service::now_stamp())),
    )
}

/// GET /api/products
pub async fn list_all() -> Result<Json<ProductsResponse>, ApiError> {
    match service::list_products().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load products: {:#}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// GET /api/status
pub async fn status() -> Result<Json<StatusResponse>, ApiError> {
    match service::status().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load products for status: {:#}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// POST /api/products/price
pub async fn update_price(
    Json(request): Json<UpdatePriceRequest>,
) -> Result<Json<UpdatePriceResponse>, ApiError> {
    match u501_update_price::execute(&request).await {
        Ok(v) => Ok(Json(v)),
        Err(e @ UpdatePriceError::NotFound(_)) => Err(api_error(StatusCode::NOT_FOUND, e)),
        Err(e) => {
            tracing::error!("Failed to update price for '{}': {}", request.title, e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// GET /api/published/check
pub async fn check_published() -> Result<Json<PublishedCheckResponse>, ApiError> {
    match u502_check_published::execute().await {
        Ok(v) => Ok(Json(v)),
        Err(e @ CheckPublishedError::NotConfigured) => Err(api_error(StatusCode::BAD_REQUEST, e)),
        Err(e @ CheckPublishedError::Fetch(_)) => {
            tracing::warn!("{}", e);
            Err(api_error(StatusCode::BAD_GATEWAY, e))
        }
        Err(e) => {
            tracing::error!("Published catalog check failed: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}
