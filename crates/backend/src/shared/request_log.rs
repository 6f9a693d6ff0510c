use axum::body::{to_bytes, Body};
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Разделяет разряды точкой: 1234567 → "1.234.567"
pub fn format_size(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Размер тела из `Content-Length`, если он указан
fn declared_size(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Одна строка на запрос: время, длительность, размер тела, статус, метод, путь.
///
/// Время голубое для 200 и коричневое для остальных ответов.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Статика отдаётся с `Content-Length`; тело читается целиком только без него
    let (body, size) = match declared_size(&parts.headers) {
        Some(len) => (body, format_size(len)),
        None => match to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                let size = format_size(bytes.len());
                (Body::from(bytes), size)
            }
            Err(_) => (Body::default(), "error".to_string()),
        },
    };

    let color_code = if parts.status.as_u16() == 200 { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, body)
}
