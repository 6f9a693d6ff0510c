use crate::domain::a001_product::repository::load_products;
use crate::domain::a001_product::ui::catalog::CatalogPage;
use crate::layout::global_context::CatalogContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Витрина стартует со встроенного каталога и подменяет его свежим products.json
    let ctx = CatalogContext::new();
    ctx.init_url_sync();
    provide_context(ctx);

    wasm_bindgen_futures::spawn_local(async move {
        match load_products().await {
            Ok(store) => {
                log::info!("Loaded {} products", store.len());
                ctx.store.set(store);
            }
            Err(e) => log::warn!("products.json not loaded, using built-in catalog: {}", e),
        }
    });

    view! {
        <CatalogPage />
    }
}
