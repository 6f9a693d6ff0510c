use contracts::domain::a001_product::{CatalogStore, StatusFilter, ViewState};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Состояние витрины, общее для всех компонентов страницы
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub store: RwSignal<CatalogStore>,
    pub view_state: RwSignal<ViewState>,
}

impl CatalogContext {
    /// Стартует со встроенным каталогом; раздел и фильтр берутся из адреса страницы
    pub fn new() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        Self {
            store: RwSignal::new(CatalogStore::builtin()),
            view_state: RwSignal::new(view_state_from_query(&search)),
        }
    }

    pub fn select_section(&self, section: &str) {
        self.view_state.update(|v| v.section = section.to_string());
    }

    pub fn select_status(&self, status: &str) {
        self.view_state
            .update(|v| v.status_filter = StatusFilter::from(status));
    }

    /// Держит `?section=..&status=..` в адресе в соответствии с состоянием
    pub fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", view_state_to_query(&this.view_state.get()));

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ViewQuery {
    #[serde(default)]
    section: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Разбор строки запроса; отсутствующие или битые параметры дают значения по умолчанию
pub fn view_state_from_query(search: &str) -> ViewState {
    let query: ViewQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let defaults = ViewState::default();

    ViewState {
        section: query
            .section
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.section),
        status_filter: query
            .status
            .filter(|s| !s.is_empty())
            .map(StatusFilter::from)
            .unwrap_or(defaults.status_filter),
    }
}

pub fn view_state_to_query(view: &ViewState) -> String {
    let query = ViewQuery {
        section: Some(view.section.clone()),
        status: Some(view.status_filter.as_str().to_string()),
    };
    serde_qs::to_string(&query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(view_state_from_query(""), ViewState::default());
        assert_eq!(view_state_from_query("?"), ViewState::default());
    }

    #[test]
    fn test_query_round_trip() {
        let view = ViewState::new("platki", "preorder");
        let query = view_state_to_query(&view);
        assert_eq!(query, "section=platki&status=preorder");
        assert_eq!(view_state_from_query(&format!("?{}", query)), view);
    }

    #[test]
    fn test_partial_query() {
        let view = view_state_from_query("?status=stock");
        assert_eq!(view.section, "home");
        assert_eq!(view.status_filter, StatusFilter::Only("stock".into()));

        let view = view_state_from_query("?section=sale&status=all");
        assert_eq!(view.section, "sale");
        assert_eq!(view.status_filter, StatusFilter::All);
    }
}
