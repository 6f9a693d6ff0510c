use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Каталог статических файлов витрины
    pub web_dir: String,
    /// Путь к `products.json`
    pub products_path: String,
    /// Адрес опубликованного сайта; пустая строка — не задан
    #[serde(default)]
    pub public_url: String,
}

impl SiteConfig {
    pub fn public_url(&self) -> Option<&str> {
        let url = self.public_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 8000

[site]
web_dir = "web"
products_path = "web/products.json"
public_url = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT` overrides `server.port` in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;

    if let Ok(port) = std::env::var("PORT") {
        match port.parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => tracing::warn!("Invalid PORT '{}', using {}", port, config.server.port),
        }
    }

    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return parse_config(&std::fs::read_to_string(&config_path)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Resolve a configured path.
///
/// Absolute paths are used as is. Relative paths resolve against the
/// executable directory when the target exists there, otherwise against the
/// current working directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(path);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    PathBuf::from(configured)
}
