//! Изменение цены товара в `products.json`

use contracts::usecases::u501_update_price::{UpdatePriceRequest, UpdatePriceResponse};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::a001_product::repository::{self, RepositoryError};
use crate::domain::a001_product::service::now_stamp;
use crate::shared::data::site::get_site;

/// Чтение, правка и запись `products.json` идут под одной блокировкой
static PRODUCTS_WRITE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[derive(Debug, Error)]
pub enum UpdatePriceError {
    #[error("product '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Меняет цену первого товара с указанным названием и ставит отметку `updated`.
///
/// Запись правится на месте: остальные поля и товары остаются как в файле.
pub async fn execute_in(
    products_path: &Path,
    request: &UpdatePriceRequest,
    updated: String,
) -> Result<UpdatePriceResponse, UpdatePriceError> {
    let _guard = PRODUCTS_WRITE_LOCK.lock().await;

    let mut document = repository::load_document(products_path).await?;
    let records = repository::records_mut(products_path, &mut document)?;

    let record = records
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|r| r.get("title").and_then(Value::as_str) == Some(request.title.as_str()))
        .ok_or_else(|| UpdatePriceError::NotFound(request.title.clone()))?;

    let old_price = match record.insert("price".into(), Value::from(request.price.clone())) {
        Some(Value::String(price)) => price,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    record.insert("updated".into(), Value::from(updated.clone()));

    repository::save_document(products_path, &document).await?;

    tracing::info!(
        "Price updated for '{}': {} -> {}",
        request.title,
        old_price,
        request.price
    );

    Ok(UpdatePriceResponse {
        success: true,
        title: request.title.clone(),
        old_price,
        new_price: request.price.clone(),
        updated,
    })
}

pub async fn execute(request: &UpdatePriceRequest) -> Result<UpdatePriceResponse, UpdatePriceError> {
    let site = get_site()?;
    execute_in(&site.products_path, request, now_stamp()).await
}
