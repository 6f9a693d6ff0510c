use contracts::domain::a001_product::{CatalogStore, ProductRecord};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::data::site::get_site;

/// Ошибки файлового хранилища товаров
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid products file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} does not contain a product list")]
    NotAList { path: PathBuf },

    #[error("failed to serialize products: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Чтение `products.json` по указанному пути
pub async fn load_from(path: &Path) -> Result<CatalogStore, RepositoryError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RepositoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    CatalogStore::from_json(&contents).map_err(|source| RepositoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Запись списка товаров: JSON с отступами, кириллица без экранирования.
pub async fn save_to(path: &Path, records: &[ProductRecord]) -> Result<(), RepositoryError> {
    let json = serde_json::to_string_pretty(records)?;
    write_replacing(path, json).await
}

/// Исходный документ `products.json` без приведения к [`ProductRecord`].
///
/// Поля записей, порядок ключей и обёртка `{"products": [...]}` сохраняются как есть.
pub async fn load_document(path: &Path) -> Result<Value, RepositoryError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RepositoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| RepositoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn save_document(path: &Path, document: &Value) -> Result<(), RepositoryError> {
    let json = serde_json::to_string_pretty(document)?;
    write_replacing(path, json).await
}

/// Массив записей документа: корневой массив или поле `products`
pub fn records_mut<'a>(
    path: &Path,
    document: &'a mut Value,
) -> Result<&'a mut Vec<Value>, RepositoryError> {
    let list = match document {
        Value::Object(map) => map.get_mut("products"),
        other => Some(other),
    };

    list.and_then(Value::as_array_mut)
        .ok_or_else(|| RepositoryError::NotAList {
            path: path.to_path_buf(),
        })
}

/// Пишет содержимое во временный файл с уникальным именем в том же каталоге
/// и переименовывает его поверх `path`.
async fn write_replacing(path: &Path, contents: String) -> Result<(), RepositoryError> {
    let target = path.to_path_buf();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let result = tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(std::io::Error::other)
    .and_then(|inner| inner);

    result.map_err(|source| RepositoryError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Все товары из настроенного `products.json`
pub async fn list_all() -> anyhow::Result<CatalogStore> {
    let site = get_site()?;
    Ok(load_from(&site.products_path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");

        let store = CatalogStore::builtin();
        save_to(&path, store.records()).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"title\": \"Пояс-юбка\""));
        assert!(written.contains("\"desc\""));
        // Временных файлов не остаётся
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        let loaded = load_from(&path).await.unwrap();
        assert_eq!(loaded, store);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "[{\"title\": ").unwrap();
        let err = load_from(&path).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_document_keeps_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"{"products": [{"title": "Платок", "order": "12", "color": "red"}]}"#,
        )
        .unwrap();

        let mut document = load_document(&path).await.unwrap();
        records_mut(&path, &mut document).unwrap()[0]["price"] = "900 р.".into();
        save_document(&path, &document).await.unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let record = &saved["products"][0];
        assert_eq!(record["order"], "12");
        assert_eq!(record["color"], "red");
        assert_eq!(record["price"], "900 р.");
        assert!(record.get("desc").is_none());
    }

    #[test]
    fn test_records_mut_rejects_non_list() {
        let path = PathBuf::from("products.json");
        let mut document = serde_json::json!({"items": []});
        let err = records_mut(&path, &mut document).unwrap_err();
        assert!(matches!(err, RepositoryError::NotAList { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        let records = CatalogStore::builtin().into_records();

        let saves = (0..16).map(|_| {
            let path = path.clone();
            let records = records.clone();
            tokio::spawn(async move { save_to(&path, &records).await })
        });
        for save in saves.collect::<Vec<_>>() {
            save.await.unwrap().unwrap();
        }

        assert_eq!(load_from(&path).await.unwrap().into_records(), records);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
