//! Загрузка JSON-ресурса в обход кэша.
//!
//! Транспорт подставляется снаружи: `gloo-net` во фронтенде, `reqwest` на сервере.

use super::cache_bust::CacheBuster;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Один GET-запрос, возвращающий тело ответа как текст
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait JsonTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Загрузчик с меткой `v=<время>` в каждом запросе.
///
/// Ровно один запрос на вызов: без повторов, таймаута и подстановки
/// закэшированных данных.
pub struct CacheBustedFetcher<T> {
    transport: T,
    buster: CacheBuster,
    last_url: Mutex<Option<String>>,
}

impl<T: JsonTransport> CacheBustedFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buster: CacheBuster::new(),
            last_url: Mutex::new(None),
        }
    }

    pub async fn fetch_fresh(&self, resource_path: &str) -> Result<serde_json::Value, FetchError> {
        self.fetch_fresh_as(resource_path).await
    }

    pub async fn fetch_fresh_as<D: DeserializeOwned>(
        &self,
        resource_path: &str,
    ) -> Result<D, FetchError> {
        let url = self.buster.bust(resource_path);
        if let Ok(mut last) = self.last_url.lock() {
            *last = Some(url.clone());
        }

        let body = self.transport.get_text(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Адрес последнего отправленного запроса
    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().ok().and_then(|last| last.clone())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
