use serde::{Deserialize, Serialize};

/// Сравнение локального `products.json` с опубликованной копией
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedCheckResponse {
    pub in_sync: bool,
    pub url: String,
    pub local_count: usize,
    pub remote_count: usize,
    pub local_hash: String,
    pub remote_hash: String,
}
