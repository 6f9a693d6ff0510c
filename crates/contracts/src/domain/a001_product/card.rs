use super::aggregate::ProductRecord;
use super::filter::{select_active, ViewState};
use super::store::CatalogStore;
use serde::{Deserialize, Serialize};

/// Каталог изображений относительно страницы
pub const IMAGE_BASE: &str = "img/";

/// Описание одной карточки витрины, не зависящее от DOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    /// `None`, если у товара нет изображений
    pub image_src: Option<String>,
    pub image_alt: String,
    pub title: String,
    /// Цена без форматирования, как в записи
    pub price_text: String,
}

impl CardDescriptor {
    pub fn from_record(record: &ProductRecord, image_base: &str) -> Self {
        Self {
            image_src: record
                .thumbnail()
                .map(|thumb| format!("{}{}", image_base, thumb)),
            image_alt: record.title.clone(),
            title: record.title.clone(),
            price_text: record.price.clone(),
        }
    }
}

pub fn build_cards<'a>(
    records: impl IntoIterator<Item = &'a ProductRecord>,
    image_base: &str,
) -> Vec<CardDescriptor> {
    records
        .into_iter()
        .map(|r| CardDescriptor::from_record(r, image_base))
        .collect()
}

/// Карточки для текущего состояния витрины
pub fn render_active(store: &CatalogStore, view: &ViewState, image_base: &str) -> Vec<CardDescriptor> {
    build_cards(select_active(store.records(), view), image_base)
}
