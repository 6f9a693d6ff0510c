pub mod cache_bust;
pub mod fetch;
pub mod price_format;
