//! Cache busting: к адресу ресурса добавляется меняющийся параметр `v`,
//! чтобы браузер и промежуточные кэши считали каждый запрос новым.

use std::sync::atomic::{AtomicU64, Ordering};

/// Имя параметра запроса
pub const CACHE_BUST_PARAM: &str = "v";

/// Добавляет `v=<token>` к адресу.
///
/// Учитывает уже существующую строку запроса (`?`/`&`), якорь `#...`
/// и заменяет прежнее значение `v` вместо дублирования.
///
/// ```
/// use contracts::shared::cache_bust::with_cache_bust;
/// assert_eq!(with_cache_bust("products.json", 5), "products.json?v=5");
/// assert_eq!(with_cache_bust("data.json?lang=ru", 5), "data.json?lang=ru&v=5");
/// ```
pub fn with_cache_bust(path: &str, token: u64) -> String {
    let (without_fragment, fragment) = match path.find('#') {
        Some(idx) => (&path[..idx], &path[idx..]),
        None => (path, ""),
    };

    let (base, query) = match without_fragment.find('?') {
        Some(idx) => (&without_fragment[..idx], &without_fragment[idx + 1..]),
        None => (without_fragment, ""),
    };

    let mut params: Vec<String> = query
        .split('&')
        .filter(|p| !p.is_empty())
        .filter(|p| {
            let key = p.split('=').next().unwrap_or_default();
            key != CACHE_BUST_PARAM
        })
        .map(str::to_string)
        .collect();
    params.push(format!("{}={}", CACHE_BUST_PARAM, token));

    format!("{}?{}{}", base, params.join("&"), fragment)
}

/// Выдаёт строго возрастающие метки на основе времени в миллисекундах.
///
/// Два запроса в одну миллисекунду получают разные метки.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicU64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Метка для момента `now_ms`: не меньше `now_ms` и больше предыдущей
    pub fn issue(&self, now_ms: u64) -> u64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let next = now_ms.max(current.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }

    pub fn issue_now(&self) -> u64 {
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.issue(now_ms)
    }

    /// Адрес ресурса с новой меткой
    pub fn bust(&self, path: &str) -> String {
        with_cache_bust(path, self.issue_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(
            with_cache_bust("products.json", 1723600000000),
            "products.json?v=1723600000000"
        );
    }

    #[test]
    fn test_existing_query() {
        assert_eq!(with_cache_bust("p.json?x=1", 7), "p.json?x=1&v=7");
        assert_eq!(with_cache_bust("p.json?", 7), "p.json?v=7");
    }

    #[test]
    fn test_replaces_existing_token() {
        assert_eq!(with_cache_bust("p.json?v=1&x=2", 9), "p.json?x=2&v=9");
        assert_eq!(with_cache_bust("p.json?v=1", 9), "p.json?v=9");
        // Параметр с похожим именем не трогаем
        assert_eq!(with_cache_bust("p.json?version=3", 9), "p.json?version=3&v=9");
    }

    #[test]
    fn test_keeps_fragment() {
        assert_eq!(with_cache_bust("page.html#top", 3), "page.html?v=3#top");
        assert_eq!(with_cache_bust("page.html?a=b#top", 3), "page.html?a=b&v=3#top");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            with_cache_bust("https://shop.example/products.json", 4),
            "https://shop.example/products.json?v=4"
        );
    }

    #[test]
    fn test_tokens_strictly_increase() {
        let buster = CacheBuster::new();
        assert_eq!(buster.issue(100), 100);
        assert_eq!(buster.issue(100), 101);
        assert_eq!(buster.issue(50), 102);
        assert_eq!(buster.issue(500), 500);
    }

    #[test]
    fn test_bust_differs_between_calls() {
        let buster = CacheBuster::new();
        let first = buster.bust("products.json");
        let second = buster.bust("products.json");
        assert_ne!(first, second);
        assert!(first.starts_with("products.json?v="));
    }
}
