use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::{format_json_number, format_json_plain};
use contracts::usecases::u508_product_analysis::{
    RecommendationResponse, RegionValue, SubmitRequest, SubmitResponse,
};
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Запрос успешно отправлен";
pub const EMPTY_RECOMMENDATION: &str = "Рекомендации найдены, но текст пустой";

pub const PROMO_YES: &str = "Да";
pub const PROMO_NO: &str = "Нет";

/// Поля формы запроса
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQueryForm {
    pub article: String,
    pub region: RegionValue,
    pub query: String,
}

impl ProductQueryForm {
    /// Форму можно отправить, только если заполнены все три поля
    pub fn is_complete(&self) -> bool {
        !self.article.is_empty() && !self.region.is_empty() && !self.query.is_empty()
    }

    pub fn to_request(&self) -> SubmitRequest {
        SubmitRequest::new(self.article.clone(), &self.region, self.query.clone())
    }
}

/// Строка таблицы результатов (одна на каждый успешный запрос)
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Ключ строки для `<For>`
    pub key: Uuid,
    pub received_at: String,
    pub article: String,
    pub region: String,
    /// Поисковый запрос, как его вернул сервер
    pub query: String,
    pub revenue: String,
    pub rating: String,
    pub reviews_last_day: String,
    pub brand_rating: String,
    pub loyalty_level: String,
    pub has_promos: &'static str,
    pub promo_days: String,
    /// Дополнительные метрики (название, значение), только присланные сервером
    pub extras: Vec<(&'static str, String)>,
}

impl ProductRow {
    /// `received_at_fallback` используется, если сервер не прислал время обработки
    pub fn from_response(resp: &SubmitResponse, received_at_fallback: &str) -> Self {
        let data = &resp.product_data;

        let extras = [
            ("Заказы", &data.orders),
            ("Цена", &data.price),
            ("Скидка", &data.discount),
            ("Наличие (%)", &data.in_stock_percent),
            ("Ср. время доставки (ч)", &data.avg_delivery_time),
            ("Основной склад", &data.main_warehouse),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name, format_json_plain(value)))
        .collect();

        Self {
            key: Uuid::new_v4(),
            received_at: resp
                .datetime
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| received_at_fallback.to_string()),
            article: resp.article.clone(),
            region: resp.region.clone(),
            query: resp
                .query
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .unwrap_or("—")
                .to_string(),
            revenue: format_json_number(&data.revenue),
            rating: format_json_plain(&data.rating),
            reviews_last_day: format_json_plain(&data.reviews_last_day),
            brand_rating: format_json_plain(&data.brand_rating),
            loyalty_level: format_json_plain(&data.loyalty_level),
            has_promos: if data.has_promos_flag() {
                PROMO_YES
            } else {
                PROMO_NO
            },
            promo_days: format_json_plain(&data.promo_days),
            extras,
        }
    }
}

/// Строка таблицы рекомендаций
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRow {
    pub recomendation: String,
}

impl From<RecommendationResponse> for RecommendationRow {
    fn from(resp: RecommendationResponse) -> Self {
        let text = resp
            .recommendation
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| EMPTY_RECOMMENDATION.to_string());
        Self { recomendation: text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(product_data: serde_json::Value) -> SubmitResponse {
        serde_json::from_value(json!({
            "article": "393594116",
            "region": "МОСКВА - ЦФО",
            "product_data": product_data,
        }))
        .unwrap()
    }

    #[test]
    fn test_form_completeness() {
        let mut form = ProductQueryForm::default();
        assert!(!form.is_complete());

        form.article = "393594116".into();
        form.query = "футболка мужская".into();
        assert!(!form.is_complete());

        form.region = RegionValue::from(vec!["МОСКВА - ЦФО".to_string()]);
        assert!(form.is_complete());

        form.query.clear();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_form_to_request_normalizes_region() {
        let form = ProductQueryForm {
            article: "393594116".into(),
            region: RegionValue::from(vec!["КАЗАНЬ - ПФО".to_string(), "МОСКВА - ЦФО".to_string()]),
            query: "платье".into(),
        };
        let request = form.to_request();
        assert_eq!(request.region, "КАЗАНЬ - ПФО");
        assert_eq!(request.article, "393594116");
        assert_eq!(request.query, "платье");
    }

    #[test]
    fn test_row_from_response() {
        let resp = response(json!({
            "revenue": 1868000,
            "rating": 4.8,
            "reviews_last_day": 25,
            "brand_rating": 4.9,
            "loyalty_level": "Серебряный",
            "has_promos": 1,
            "promo_days": 12
        }));
        let row = ProductRow::from_response(&resp, "01.01.2025 10:00:00");

        assert_eq!(row.article, "393594116");
        assert_eq!(row.region, "МОСКВА - ЦФО");
        assert_eq!(row.revenue, "1 868 000");
        assert_eq!(row.rating, "4.8");
        assert_eq!(row.reviews_last_day, "25");
        assert_eq!(row.brand_rating, "4.9");
        assert_eq!(row.loyalty_level, "Серебряный");
        assert_eq!(row.has_promos, PROMO_YES);
        assert_eq!(row.promo_days, "12");
        assert_eq!(row.received_at, "01.01.2025 10:00:00");
        assert_eq!(row.query, "—");
        assert!(row.extras.is_empty());
    }

    #[test]
    fn test_row_keeps_returned_query() {
        let mut resp = response(json!({}));
        resp.query = Some("футболка мужская".to_string());
        let row = ProductRow::from_response(&resp, "");
        assert_eq!(row.query, "футболка мужская");
    }

    #[test]
    fn test_row_has_promos_other_values() {
        for value in [json!(0), json!(true), json!("1"), json!(null)] {
            let row = ProductRow::from_response(&response(json!({ "has_promos": value })), "");
            assert_eq!(row.has_promos, PROMO_NO);
        }
    }

    #[test]
    fn test_row_uses_server_time_and_extras() {
        let mut resp = response(json!({
            "Выручка": 50000,
            "Участвует в акциях": 1,
            "Основной склад": "Коледино",
            "Цена": 1299
        }));
        resp.datetime = Some("2025-06-01T12:34:56.789012".to_string());

        let row = ProductRow::from_response(&resp, "unused");
        assert_eq!(row.received_at, "01.06.2025 12:34:56");
        assert_eq!(row.revenue, "50 000");
        assert_eq!(row.has_promos, PROMO_YES);
        assert_eq!(
            row.extras,
            vec![("Цена", "1299".to_string()), ("Основной склад", "Коледино".to_string())]
        );
    }

    #[test]
    fn test_rows_have_distinct_keys() {
        let resp = response(json!({}));
        let a = ProductRow::from_response(&resp, "");
        let b = ProductRow::from_response(&resp, "");
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_recommendation_row() {
        let row = RecommendationRow::from(RecommendationResponse {
            recommendation: Some("Текущая позиция товара: 42\n".to_string()),
        });
        assert_eq!(row.recomendation, "Текущая позиция товара: 42");

        let empty = RecommendationRow::from(RecommendationResponse { recommendation: None });
        assert_eq!(empty.recomendation, EMPTY_RECOMMENDATION);

        let blank = RecommendationRow::from(RecommendationResponse {
            recommendation: Some("  ".to_string()),
        });
        assert_eq!(blank.recomendation, EMPTY_RECOMMENDATION);
    }
}
