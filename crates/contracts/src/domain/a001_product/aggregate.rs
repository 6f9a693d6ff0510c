use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога (одна карточка на витрине)
///
/// Имена JSON-полей совпадают с форматом `products.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Идентификатор строки из таблицы управления (есть не во всех файлах)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Относительные пути изображений; первое — миниатюра карточки
    #[serde(default)]
    pub images: Vec<String>,

    pub title: String,

    /// Цена в исходном виде: `"3000 р."`
    #[serde(default)]
    pub price: String,

    #[serde(rename = "desc", default)]
    pub description: String,

    /// Строка состава: `"Состав: 100% хлопок"`
    #[serde(rename = "meta", default)]
    pub composition_text: String,

    #[serde(rename = "link", default)]
    pub external_link: String,

    #[serde(default)]
    pub status: String,

    /// Порядок из таблицы. При отрисовке не используется.
    #[serde(
        rename = "order",
        default,
        deserialize_with = "deserialize_sort_order"
    )]
    pub sort_order: i64,

    #[serde(default)]
    pub section: String,

    /// Отметка последнего изменения цены (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl ProductRecord {
    /// Миниатюра карточки, если изображения заданы
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// `order` приходит и числом, и строкой (выгрузка из таблицы хранит строки)
fn deserialize_sort_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOrder {
        Int(i64),
        Float(f64),
        Text(String),
        Null(()),
    }

    match RawOrder::deserialize(deserializer)? {
        RawOrder::Int(v) => Ok(v),
        RawOrder::Float(v) => Ok(v as i64),
        RawOrder::Text(s) if s.trim().is_empty() => Ok(0),
        RawOrder::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid order '{}': {}", s, e))),
        RawOrder::Null(()) => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json_field_names() {
        let json = r#"{
            "images": ["product_2/product_2_1.jpg"],
            "title": "Пояс-юбка",
            "price": "3000 р.",
            "desc": "Пояс, который имеет функцию мешка",
            "meta": "Состав: 50% хлопок 50% лён",
            "link": "https://t.me/stub123",
            "status": "stock",
            "order": 2,
            "section": "home"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Пояс-юбка");
        assert_eq!(record.description, "Пояс, который имеет функцию мешка");
        assert_eq!(record.composition_text, "Состав: 50% хлопок 50% лён");
        assert_eq!(record.external_link, "https://t.me/stub123");
        assert_eq!(record.sort_order, 2);
        assert_eq!(record.thumbnail(), Some("product_2/product_2_1.jpg"));
        assert!(record.id.is_none());
    }

    #[test]
    fn test_order_as_string() {
        let json = r#"{"id": "7", "title": "Платок", "order": "12", "images": []}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sort_order, 12);
        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.thumbnail(), None);
    }

    #[test]
    fn test_order_missing_or_empty() {
        let missing: ProductRecord = serde_json::from_str(r#"{"title": "a"}"#).unwrap();
        assert_eq!(missing.sort_order, 0);
        let empty: ProductRecord =
            serde_json::from_str(r#"{"title": "a", "order": ""}"#).unwrap();
        assert_eq!(empty.sort_order, 0);
    }

    #[test]
    fn test_order_invalid_string_is_error() {
        let result: Result<ProductRecord, _> =
            serde_json::from_str(r#"{"title": "a", "order": "first"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_optionals() {
        let json = r#"{"title": "a", "price": "10 р."}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("updated").is_none());
        assert_eq!(value["desc"], "");
        assert_eq!(value["order"], 0);
    }
}
