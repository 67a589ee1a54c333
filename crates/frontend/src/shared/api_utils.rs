//! API utilities for frontend-backend communication
//!
//! URL construction, the error type shared by all API calls and
//! response decoding with server error extraction.

use super::config::api_base;
use contracts::usecases::u508_product_analysis::ErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Общий текст ошибки, если сервер не прислал свой
pub const GENERIC_ERROR: &str = "Произошла ошибка при отправке запроса";

/// Ошибка вызова API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера (сеть, CORS, сериализация)
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// Сервер ответил не-2xx статусом
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("-"))]
    Server {
        status: u16,
        message: Option<String>,
    },
    /// Ответ 2xx, но тело не разобралось
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Текст для показа пользователю: `detail`/`message` сервера или общий текст
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// Разобрать тело ответа с ошибкой
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.user_message());
        ApiError::Server { status, message }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Проверить статус и разобрать JSON-ответ
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    if !response.ok() {
        return Err(ApiError::from_error_body(status, &text));
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
