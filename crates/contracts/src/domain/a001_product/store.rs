use super::aggregate::ProductRecord;
use serde::Deserialize;

/// Неизменяемый набор товаров витрины
///
/// Порядок записей — порядок исходного файла; `sort_order` для сортировки
/// не применяется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    records: Vec<ProductRecord>,
}

/// Ответ `/api/products` содержит список внутри объекта
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    List(Vec<ProductRecord>),
    Wrapped { products: Vec<ProductRecord> },
}

impl CatalogStore {
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// Разбор `products.json`: массив верхнего уровня или объект с полем `products`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let payload: CatalogPayload = serde_json::from_str(json)?;
        Ok(Self::from_value_payload(payload))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let payload: CatalogPayload = serde_json::from_value(value)?;
        Ok(Self::from_value_payload(payload))
    }

    fn from_value_payload(payload: CatalogPayload) -> Self {
        match payload {
            CatalogPayload::List(records) => Self::from_records(records),
            CatalogPayload::Wrapped { products } => Self::from_records(products),
        }
    }

    /// Встроенный каталог, с которым страница стартует до загрузки `products.json`
    pub fn builtin() -> Self {
        Self::from_records(vec![
            ProductRecord {
                id: None,
                images: vec!["product_2/product_2_1.jpg".into()],
                title: "Пояс-юбка".into(),
                price: "3000 р.".into(),
                description: "Пояс, который имеет функцию мешка".into(),
                composition_text: "Состав: 50% хлопок 50% лён".into(),
                external_link: "https://t.me/stub123".into(),
                status: "stock".into(),
                sort_order: 2,
                section: "home".into(),
                updated: None,
            },
            ProductRecord {
                id: None,
                images: vec!["product_3/product_3_1.jpg".into()],
                title: "Пояс P1".into(),
                price: "3500 р.".into(),
                description: "Пояс, который имеет функцию мешка".into(),
                composition_text: "Состав: 100% хлопок (цвет на выбор)".into(),
                external_link: "https://t.me/stub123".into(),
                status: "stock".into(),
                sort_order: 3,
                section: "home".into(),
                updated: None,
            },
        ])
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Разделы в порядке первого появления
    pub fn sections(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.section.as_str()))
    }

    /// Статусы в порядке первого появления
    pub fn statuses(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.status.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|existing| existing == v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store() {
        let store = CatalogStore::builtin();
        assert_eq!(store.len(), 2);
        assert!(store.records().iter().all(|r| !r.images.is_empty()));
        assert_eq!(store.sections(), vec!["home".to_string()]);
        assert_eq!(store.statuses(), vec!["stock".to_string()]);
        assert_eq!(
            store.find_by_title("Пояс P1").map(|r| r.price.as_str()),
            Some("3500 р.")
        );
    }

    #[test]
    fn test_from_json_array() {
        let store = CatalogStore::from_json(
            r#"[{"title": "b", "order": 9}, {"title": "a", "order": 1}]"#,
        )
        .unwrap();
        let titles: Vec<&str> = store.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_wrapped() {
        let store = CatalogStore::from_json(
            r#"{"success": true, "count": 1, "products": [{"title": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(CatalogStore::from_json("{\"items\": 1}").is_err());
        assert!(CatalogStore::from_json("not json").is_err());
    }

    #[test]
    fn test_distinct_keeps_first_seen_order() {
        let store = CatalogStore::from_json(
            r#"[
                {"title": "a", "section": "home", "status": "preorder"},
                {"title": "b", "section": "sale", "status": "stock"},
                {"title": "c", "section": "home", "status": "stock"}
            ]"#,
        )
        .unwrap();
        assert_eq!(store.sections(), vec!["home", "sale"]);
        assert_eq!(store.statuses(), vec!["preorder", "stock"]);
    }
}
