//! Браузерный транспорт для загрузчика JSON

use async_trait::async_trait;
use contracts::shared::fetch::{FetchError, JsonTransport};

/// GET через `fetch` браузера (`gloo-net`)
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl JsonTransport for GlooTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = gloo_net::http::Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

// Вне браузера `fetch` недоступен
#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl JsonTransport for GlooTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Network(format!(
            "browser fetch is not available on this target: {}",
            url
        )))
    }
}
