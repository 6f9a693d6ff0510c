//! Сверка опубликованного `products.json` с локальным файлом

use contracts::domain::a001_product::ProductRecord;
use contracts::shared::fetch::{CacheBustedFetcher, FetchError, JsonTransport};
use contracts::usecases::u502_check_published::PublishedCheckResponse;
use std::path::Path;
use thiserror::Error;

use crate::domain::a001_product::repository::{self, RepositoryError};
use crate::domain::a001_product::service::catalog_hash;
use crate::shared::data::site::get_site;
use crate::shared::http::ReqwestTransport;

#[derive(Debug, Error)]
pub enum CheckPublishedError {
    #[error("public_url is not configured")]
    NotConfigured,

    #[error("failed to fetch published catalog: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Адрес `products.json` на опубликованном сайте
pub fn published_products_url(public_url: &str) -> String {
    format!("{}/products.json", public_url.trim_end_matches('/'))
}

pub async fn execute_with<T: JsonTransport>(
    fetcher: &CacheBustedFetcher<T>,
    public_url: &str,
    products_path: &Path,
) -> Result<PublishedCheckResponse, CheckPublishedError> {
    let local = repository::load_from(products_path).await?;

    let url = published_products_url(public_url);
    let remote: Vec<ProductRecord> = fetcher.fetch_fresh_as(&url).await?;

    let local_hash = catalog_hash(local.records())?;
    let remote_hash = catalog_hash(&remote)?;
    let in_sync = local_hash == remote_hash;

    if in_sync {
        tracing::info!("Published catalog at {} is up to date", url);
    } else {
        tracing::warn!(
            "Published catalog at {} differs: local {} items, remote {} items",
            url,
            local.len(),
            remote.len()
        );
    }

    Ok(PublishedCheckResponse {
        in_sync,
        url,
        local_count: local.len(),
        remote_count: remote.len(),
        local_hash,
        remote_hash,
    })
}

pub async fn execute() -> Result<PublishedCheckResponse, CheckPublishedError> {
    let site = get_site()?;
    let public_url = site
        .public_url
        .as_deref()
        .ok_or(CheckPublishedError::NotConfigured)?;

    let fetcher = CacheBustedFetcher::new(ReqwestTransport::new()?);
    execute_with(&fetcher, public_url, &site.products_path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_product::CatalogStore;

    struct StaticTransport(Result<String, u16>);

    #[async_trait]
    impl JsonTransport for StaticTransport {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            assert!(url.starts_with("https://shop.example/products.json?v="));
            match &self.0 {
                Ok(body) => Ok(body.clone()),
                Err(code) => Err(FetchError::Status(*code)),
            }
        }
    }

    async fn local_file() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        repository::save_to(&path, CatalogStore::builtin().records())
            .await
            .unwrap();
        (dir, path)
    }

    #[test]
    fn test_published_products_url() {
        assert_eq!(
            published_products_url("https://shop.example/"),
            "https://shop.example/products.json"
        );
        assert_eq!(
            published_products_url("https://shop.example"),
            "https://shop.example/products.json"
        );
    }

    #[tokio::test]
    async fn test_in_sync() {
        let (_dir, path) = local_file().await;
        let remote = serde_json::to_string(CatalogStore::builtin().records()).unwrap();
        let fetcher = CacheBustedFetcher::new(StaticTransport(Ok(remote)));

        let result = execute_with(&fetcher, "https://shop.example/", &path)
            .await
            .unwrap();
        assert!(result.in_sync);
        assert_eq!(result.local_count, 2);
        assert_eq!(result.remote_count, 2);
        assert_eq!(result.local_hash, result.remote_hash);
    }

    #[tokio::test]
    async fn test_out_of_sync() {
        let (_dir, path) = local_file().await;
        let remote = r#"[{"title": "Пояс-юбка", "price": "2900 р."}]"#.to_string();
        let fetcher = CacheBustedFetcher::new(StaticTransport(Ok(remote)));

        let result = execute_with(&fetcher, "https://shop.example", &path)
            .await
            .unwrap();
        assert!(!result.in_sync);
        assert_eq!(result.remote_count, 1);
    }

    #[tokio::test]
    async fn test_remote_not_json() {
        let (_dir, path) = local_file().await;
        let fetcher = CacheBustedFetcher::new(StaticTransport(Ok("<html></html>".into())));
        let err = execute_with(&fetcher, "https://shop.example", &path)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckPublishedError::Fetch(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_remote_status_error() {
        let (_dir, path) = local_file().await;
        let fetcher = CacheBustedFetcher::new(StaticTransport(Err(503)));
        let err = execute_with(&fetcher, "https://shop.example", &path)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckPublishedError::Fetch(FetchError::Status(503))));
    }
}
