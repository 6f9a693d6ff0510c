use super::aggregate::ProductRecord;
use serde::{Deserialize, Serialize};

/// Ответ `GET /api/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<ProductRecord>,
    /// SHA-256 (hex) канонического JSON списка товаров
    pub hash: String,
    pub timestamp: String,
    pub count: usize,
}

/// Ответ `GET /api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub status: String,
    pub products_count: usize,
    pub last_update: String,
}

/// Тело ответа при ошибке сервера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            timestamp: timestamp.into(),
        }
    }
}
