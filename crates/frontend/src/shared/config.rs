//! Адрес backend API.
//!
//! Порядок выбора:
//! 1. переменная `PRODUCT_API_BASE` на этапе сборки (`PRODUCT_API_BASE=https://api.example.com trunk build`)
//! 2. хост текущей страницы и порт backend по умолчанию
//! 3. пустая строка (относительные URL), если окна нет

/// Порт FastAPI backend по умолчанию
pub const DEFAULT_API_PORT: u16 = 8000;

const API_BASE_OVERRIDE: Option<&str> = option_env!("PRODUCT_API_BASE");

/// Get the base URL for API requests
///
/// Returns e.g. "http://localhost:8000", without a trailing slash.
pub fn api_base() -> String {
    if let Some(base) = configured_base(API_BASE_OVERRIDE) {
        return base;
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

fn configured_base(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
}
