use contracts::domain::a001_product::ALL_STATUSES;
use leptos::prelude::*;

/// Подпись раздела на вкладке
pub fn section_label(section: &str) -> String {
    match section {
        "home" => "Главная".to_string(),
        other => other.to_string(),
    }
}

/// Подпись статуса в фильтре
pub fn status_label(status: &str) -> String {
    match status {
        ALL_STATUSES => "Все".to_string(),
        "stock" => "В наличии".to_string(),
        "preorder" => "Под заказ".to_string(),
        other => other.to_string(),
    }
}

/// Пункты фильтра: «все» и статусы из каталога
pub fn status_options(statuses: Vec<String>) -> Vec<(String, String)> {
    std::iter::once(ALL_STATUSES.to_string())
        .chain(statuses.into_iter().filter(|s| s != ALL_STATUSES))
        .map(|s| {
            let label = status_label(&s);
            (s, label)
        })
        .collect()
}

/// Вкладки разделов
#[component]
pub fn SectionTabs(
    /// Разделы в порядке появления в каталоге
    #[prop(into)]
    sections: Signal<Vec<String>>,
    /// Выбранный раздел
    #[prop(into)]
    active: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <nav class="catalog-tabs">
            <For
                each=move || sections.get()
                key=|section| section.clone()
                children=move |section| {
                    let label = section_label(&section);
                    let section_for_class = section.clone();
                    let is_active = move || active.get() == section_for_class;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() { "catalog-tab catalog-tab--active" } else { "catalog-tab" }
                            }
                            on:click=move |_| on_select.run(section.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </nav>
    }
}

/// Выпадающий список фильтра по статусу
#[component]
pub fn StatusSelect(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Пункты: (значение, подпись)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group catalog-filter">
            <label class="form__label" for="catalog-status">"Наличие"</label>
            <select
                id="catalog-status"
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
