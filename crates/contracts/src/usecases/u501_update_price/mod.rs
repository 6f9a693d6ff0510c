use serde::{Deserialize, Serialize};

/// Запрос на изменение цены товара (поиск по названию)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePriceRequest {
    pub title: String,
    /// Новая цена в исходном виде: `"3000 р."`
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePriceResponse {
    pub success: bool,
    pub title: String,
    pub old_price: String,
    pub new_price: String,
    pub updated: String,
}
