use super::aggregate::ProductRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Значение фильтра, отключающее отбор по статусу
pub const ALL_STATUSES: &str = "all";

/// Раздел, открытый при загрузке страницы
pub const DEFAULT_SECTION: &str = "home";

/// Фильтр по статусу наличия
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == status,
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        if value == ALL_STATUSES {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        if value == ALL_STATUSES {
            StatusFilter::All
        } else {
            StatusFilter::Only(value)
        }
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Состояние витрины: выбранный раздел и фильтр по статусу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub section: String,
    pub status_filter: StatusFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            status_filter: StatusFilter::All,
        }
    }
}

impl ViewState {
    pub fn new(section: impl Into<String>, status_filter: impl Into<StatusFilter>) -> Self {
        Self {
            section: section.into(),
            status_filter: status_filter.into(),
        }
    }
}

/// Отбор товаров раздела с учётом фильтра статуса.
///
/// Относительный порядок записей сохраняется, пересортировки нет.
pub fn select_active<'a>(records: &'a [ProductRecord], view: &ViewState) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|r| r.section == view.section)
        .filter(|r| view.status_filter.matches(&r.status))
        .collect()
}
