//! Перенос описаний карточек в DOM.
//!
//! Единственное место, где витрина трогает DOM напрямую; отбор и подготовка
//! карточек живут в `contracts` и от браузера не зависят.

use contracts::domain::a001_product::{CardDescriptor, CatalogStore, ViewState, IMAGE_BASE};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// `id` контейнера каталога на странице
pub const CATALOG_CONTAINER_ID: &str = "catalog";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted(usize),
    ContainerMissing,
}

/// Заменяет содержимое контейнера карточками.
///
/// Без контейнера ничего не делает. После вставки контейнер принудительно
/// делается видимым: стили страницы могут прятать его до загрузки.
pub fn mount_cards(
    document: &Document,
    container_id: &str,
    cards: &[CardDescriptor],
) -> Result<MountOutcome, JsValue> {
    let Some(container) = document.get_element_by_id(container_id) else {
        return Ok(MountOutcome::ContainerMissing);
    };

    container.set_inner_html("");

    for card in cards {
        let node = build_card(document, card)?;
        container.append_child(&node)?;
    }

    if let Some(element) = container.dyn_ref::<HtmlElement>() {
        let style = element.style();
        style.set_property("display", "grid")?;
        style.set_property("visibility", "visible")?;
        style.set_property("opacity", "1")?;
    }

    Ok(MountOutcome::Mounted(cards.len()))
}

fn build_card(document: &Document, card: &CardDescriptor) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name("card");

    let img_box = document.create_element("div")?;
    img_box.set_class_name("card-img");

    let img = document.create_element("img")?;
    if let Some(src) = &card.image_src {
        img.set_attribute("src", src)?;
    }
    img.set_attribute("alt", &card.image_alt)?;
    img_box.append_child(&img)?;
    root.append_child(&img_box)?;

    let title = document.create_element("h3")?;
    title.set_text_content(Some(&card.title));
    root.append_child(&title)?;

    let price = document.create_element("div")?;
    price.set_class_name("price");
    price.set_text_content(Some(&card.price_text));
    root.append_child(&price)?;

    Ok(root)
}

/// Отбирает товары по состоянию витрины и монтирует карточки в `#catalog`
pub fn render_active(store: &CatalogStore, view: &ViewState) {
    let cards = contracts::domain::a001_product::render_active(store, view, IMAGE_BASE);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    match mount_cards(&document, CATALOG_CONTAINER_ID, &cards) {
        Ok(MountOutcome::Mounted(count)) => log::debug!(
            "Catalog rendered: section='{}', status='{}', cards={}",
            view.section,
            view.status_filter,
            count
        ),
        Ok(MountOutcome::ContainerMissing) => {
            log::debug!("#{} not found, catalog not rendered", CATALOG_CONTAINER_ID)
        }
        Err(e) => log::error!("Failed to mount catalog cards: {:?}", e),
    }
}
