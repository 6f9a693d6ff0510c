use super::repository;
use contracts::domain::a001_product::dto::{ProductsResponse, StatusResponse};
use contracts::domain::a001_product::{CatalogStore, ProductRecord};

/// SHA-256 (hex) компактного JSON списка товаров.
///
/// Порядок полей фиксирован структурой, поэтому хэш одинаков для одинаковых
/// данных независимо от форматирования исходного файла.
pub fn catalog_hash(records: &[ProductRecord]) -> anyhow::Result<String> {
    use sha2::{Digest, Sha256};
    let canonical = serde_json::to_string(records)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn now_stamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn products_response(store: CatalogStore) -> anyhow::Result<ProductsResponse> {
    let hash = catalog_hash(store.records())?;
    let count = store.len();
    Ok(ProductsResponse {
        success: true,
        products: store.into_records(),
        hash,
        timestamp: now_stamp(),
        count,
    })
}

pub fn status_response(store: &CatalogStore) -> StatusResponse {
    StatusResponse {
        success: true,
        status: "online".to_string(),
        products_count: store.len(),
        last_update: now_stamp(),
    }
}

/// Получение списка товаров для `/api/products`
pub async fn list_products() -> anyhow::Result<ProductsResponse> {
    products_response(repository::list_all().await?)
}

pub async fn status() -> anyhow::Result<StatusResponse> {
    Ok(status_response(&repository::list_all().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_hash_is_stable() {
        let store = CatalogStore::builtin();
        let a = catalog_hash(store.records()).unwrap();
        let b = catalog_hash(CatalogStore::builtin().records()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_catalog_hash_ignores_formatting() {
        let compact = CatalogStore::from_json(r#"[{"title":"a","order":"1"}]"#).unwrap();
        let pretty = CatalogStore::from_json("[\n  {\n    \"order\": 1,\n    \"title\": \"a\"\n  }\n]").unwrap();
        assert_eq!(
            catalog_hash(compact.records()).unwrap(),
            catalog_hash(pretty.records()).unwrap()
        );
    }

    #[test]
    fn test_catalog_hash_changes_with_price() {
        let store = CatalogStore::builtin();
        let mut records = store.records().to_vec();
        let before = catalog_hash(&records).unwrap();
        records[0].price = "3100 р.".to_string();
        assert_ne!(before, catalog_hash(&records).unwrap());
    }

    #[test]
    fn test_products_response() {
        let response = products_response(CatalogStore::builtin()).unwrap();
        assert!(response.success);
        assert_eq!(response.count, 2);
        assert_eq!(response.products.len(), 2);
        assert_eq!(
            response.hash,
            catalog_hash(CatalogStore::builtin().records()).unwrap()
        );
    }

    #[test]
    fn test_status_response() {
        let response = status_response(&CatalogStore::builtin());
        assert_eq!(response.status, "online");
        assert_eq!(response.products_count, 2);
    }
}
