pub mod config;
pub mod data;
pub mod http;
pub mod request_log;
