use contracts::domain::a001_product::CatalogStore;
use contracts::shared::fetch::CacheBustedFetcher;

use crate::shared::http::GlooTransport;

/// Файл с товарами рядом со страницей
pub const PRODUCTS_RESOURCE: &str = "products.json";

/// Загружает `products.json` в обход кэша браузера
pub async fn load_products() -> Result<CatalogStore, String> {
    let fetcher = CacheBustedFetcher::new(GlooTransport);
    let value = fetcher
        .fetch_fresh(PRODUCTS_RESOURCE)
        .await
        .map_err(|e| format!("{}", e))?;

    if let Some(url) = fetcher.last_url() {
        log::debug!("Products loaded from {}", url);
    }

    CatalogStore::from_value(value).map_err(|e| format!("Failed to parse products: {}", e))
}
