use crate::shared::config::{resolve_path, Config};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Пути и адреса витрины, вычисленные из конфигурации один раз при старте
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub web_dir: PathBuf,
    pub products_path: PathBuf,
    pub public_url: Option<String>,
}

impl SiteContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            web_dir: resolve_path(&config.site.web_dir),
            products_path: resolve_path(&config.site.products_path),
            public_url: config.site.public_url().map(str::to_string),
        }
    }
}

static SITE: OnceCell<SiteContext> = OnceCell::new();

pub fn initialize_site(config: &Config) -> anyhow::Result<&'static SiteContext> {
    let context = SiteContext::from_config(config);
    if !context.products_path.exists() {
        tracing::warn!(
            "products file not found at {}, /api/products will fail until it is created",
            context.products_path.display()
        );
    }
    SITE.set(context)
        .map_err(|_| anyhow::anyhow!("site context already initialized"))?;
    get_site()
}

pub fn get_site() -> anyhow::Result<&'static SiteContext> {
    SITE.get()
        .ok_or_else(|| anyhow::anyhow!("site context has not been initialized"))
}
