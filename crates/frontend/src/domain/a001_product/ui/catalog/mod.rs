pub mod controls;
pub mod mount;

use self::controls::{status_options, SectionTabs, StatusSelect};
use self::mount::{render_active, CATALOG_CONTAINER_ID};
use crate::layout::global_context::CatalogContext;
use leptos::prelude::*;

/// Страница каталога: вкладки разделов, фильтр наличия и сетка карточек.
///
/// Сетку заполняет [`render_active`] при каждом изменении каталога или
/// состояния витрины.
#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_context::<CatalogContext>().expect("CatalogContext not found in context");

    let sections = Signal::derive(move || ctx.store.with(|s| s.sections()));
    let active_section = Signal::derive(move || ctx.view_state.with(|v| v.section.clone()));
    let status_value =
        Signal::derive(move || ctx.view_state.with(|v| v.status_filter.as_str().to_string()));
    let options = Signal::derive(move || status_options(ctx.store.with(|s| s.statuses())));

    Effect::new(move |_| {
        ctx.store.with(|store| {
            ctx.view_state.with(|view| render_active(store, view));
        });
    });

    view! {
        <section class="catalog-page">
            <div class="catalog-controls">
                <SectionTabs
                    sections=sections
                    active=active_section
                    on_select=Callback::new(move |section: String| ctx.select_section(&section))
                />
                <StatusSelect
                    value=status_value
                    options=options
                    on_change=Callback::new(move |status: String| ctx.select_status(&status))
                />
            </div>
            <div id=CATALOG_CONTAINER_ID class="catalog"></div>
        </section>
    }
}
