use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Показатели товара из ответа /submit-request/.
///
/// Сервер может отдавать как технические имена полей, так и русские названия
/// колонок датасета, поэтому у каждого поля есть alias. Числа приходят то
/// целыми, то дробными, так что значения хранятся как `Value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(default, alias = "Выручка")]
    pub revenue: Value,
    #[serde(default, alias = "Рейтинг")]
    pub rating: Value,
    #[serde(default, alias = "Количество отзывов")]
    pub reviews_last_day: Value,
    #[serde(default, alias = "Рейтинг продавца")]
    pub brand_rating: Value,
    #[serde(default, alias = "Уровень лояльности")]
    pub loyalty_level: Value,
    /// 1 — товар участвует в акциях, любое другое значение — нет
    #[serde(default, alias = "Участвует в акциях")]
    pub has_promos: Value,
    #[serde(default, alias = "Дней в акциях")]
    pub promo_days: Value,

    // Дополнительные метрики, если сервер их прислал
    #[serde(default, alias = "Заказы")]
    pub orders: Value,
    #[serde(default, alias = "Цена")]
    pub price: Value,
    #[serde(default, alias = "Скидка")]
    pub discount: Value,
    #[serde(default, alias = "Наличие (%)")]
    pub in_stock_percent: Value,
    #[serde(default, alias = "Ср время доставки (ч)")]
    pub avg_delivery_time: Value,
    #[serde(default, alias = "Основной склад")]
    pub main_warehouse: Value,
}

impl ProductData {
    /// Участие в акциях: строго число 1
    pub fn has_promos_flag(&self) -> bool {
        self.has_promos.as_f64() == Some(1.0)
    }
}

/// Успешный ответ POST /submit-request/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub article: String,
    pub region: String,
    #[serde(default)]
    pub product_data: ProductData,
    /// Время обработки на сервере (ISO 8601)
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// Ответ GET /get-recommendation/
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Тело ответа с ошибкой: `{"detail": ...}` или `{"message": ...}`.
///
/// `detail` бывает строкой либо списком ошибок валидации вида `{"msg": ...}`.
/// Оба поля хранятся как `Value`: поле неожиданного типа не должно ломать разбор соседнего.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// Текст ошибки для пользователя, если сервер его прислал
    pub fn user_message(&self) -> Option<String> {
        if let Some(detail) = self.detail.as_ref().and_then(detail_text) {
            return Some(detail);
        }
        self.message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
    }
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj.get("msg").and_then(Value::as_str).map(str::to_string),
                    _ => None,
                })
                .filter(|s| !s.trim().is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}
