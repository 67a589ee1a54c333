use super::api;
use super::model::{ProductQueryForm, ProductRow, RecommendationRow, SUCCESS_MESSAGE};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::now_local;
use contracts::usecases::u508_product_analysis::{
    default_region_labels, group_regions, RecommendationResponse, RegionGroup, RegionValue,
    SubmitRequest, SubmitResponse,
};
use leptos::prelude::*;

/// ViewModel страницы анализа товара
///
/// Все состояние в сигналах, поэтому VM копируется в замыкания по значению.
#[derive(Clone, Copy)]
pub struct ProductAnalysisVm {
    pub article: RwSignal<String>,
    pub region: RwSignal<RegionValue>,
    pub query: RwSignal<String>,

    pub is_submitting: RwSignal<bool>,
    pub is_loading_recommendation: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,

    /// История успешных запросов за сессию
    pub products: RwSignal<Vec<ProductRow>>,
    /// Не больше одной строки
    pub recommendations: RwSignal<Vec<RecommendationRow>>,

    pub region_groups: RwSignal<Vec<RegionGroup>>,
    pub help_open: RwSignal<bool>,
}

impl ProductAnalysisVm {
    pub fn new() -> Self {
        Self {
            article: RwSignal::new(String::new()),
            region: RwSignal::new(RegionValue::default()),
            query: RwSignal::new(String::new()),
            is_submitting: RwSignal::new(false),
            is_loading_recommendation: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            products: RwSignal::new(Vec::new()),
            recommendations: RwSignal::new(Vec::new()),
            region_groups: RwSignal::new(group_regions(&default_region_labels())),
            help_open: RwSignal::new(false),
        }
    }

    // ------------------------------------------------------------------
    // Производные значения
    // ------------------------------------------------------------------

    pub fn form(&self) -> ProductQueryForm {
        ProductQueryForm {
            article: self.article.get(),
            region: self.region.get(),
            query: self.query.get(),
        }
    }

    fn form_untracked(&self) -> ProductQueryForm {
        ProductQueryForm {
            article: self.article.get_untracked(),
            region: self.region.get_untracked(),
            query: self.query.get_untracked(),
        }
    }

    /// Все три поля заполнены
    pub fn is_form_valid(&self) -> bool {
        self.form().is_complete()
    }

    /// Кнопка "Отправить" активна
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_submitting.get()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting.get() {
            "Отправка..."
        } else {
            "Отправить"
        }
    }

    pub fn recommendation_label(&self) -> &'static str {
        if self.is_loading_recommendation.get() {
            "Загрузка..."
        } else {
            "Получить рекомендацию"
        }
    }

    pub fn select_region(&self, selected: Vec<String>) {
        self.region.set(RegionValue::from(selected));
    }

    // ------------------------------------------------------------------
    // Отправка запроса
    // ------------------------------------------------------------------

    /// Подготовить отправку: `None`, если форма не заполнена или запрос уже идёт
    pub fn begin_submit(&self) -> Option<SubmitRequest> {
        let form = self.form_untracked();
        if !form.is_complete() || self.is_submitting.get_untracked() {
            return None;
        }

        self.is_submitting.set(true);
        self.error.set(None);
        self.success.set(None);
        Some(form.to_request())
    }

    /// Применить результат отправки
    pub fn finish_submit(&self, result: Result<SubmitResponse, ApiError>) {
        match result {
            Ok(response) => {
                log::info!(
                    "Product data received: article={}, region={}",
                    response.article,
                    response.region
                );
                let row = ProductRow::from_response(&response, &now_local());
                self.products.update(|rows| rows.push(row));
                self.article.set(String::new());
                self.region.set(RegionValue::default());
                self.query.set(String::new());
                self.success.set(Some(SUCCESS_MESSAGE.to_string()));
            }
            Err(e) => {
                log::warn!("Submit failed: {}", e);
                self.error.set(Some(e.user_message()));
            }
        }
        self.is_submitting.set(false);
    }

    pub fn submit_command(&self) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let vm = *self;

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::submit_request(&request).await;
            vm.finish_submit(result);
        });
    }

    // ------------------------------------------------------------------
    // Рекомендация
    // ------------------------------------------------------------------

    pub fn begin_recommendation(&self) -> bool {
        if self.is_loading_recommendation.get_untracked() {
            return false;
        }
        self.is_loading_recommendation.set(true);
        true
    }

    /// Успех заменяет строку рекомендации, ошибка только логируется
    pub fn finish_recommendation(&self, result: Result<RecommendationResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.recommendations
                    .set(vec![RecommendationRow::from(response)]);
            }
            Err(e) => {
                log::error!("Failed to fetch recommendation: {}", e);
            }
        }
        self.is_loading_recommendation.set(false);
    }

    pub fn recommendation_command(&self) {
        if !self.begin_recommendation() {
            return;
        }
        let vm = *self;

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_recommendation().await;
            vm.finish_recommendation(result);
        });
    }

    // ------------------------------------------------------------------
    // Регионы
    // ------------------------------------------------------------------

    /// Пустой список или ошибка оставляют встроенный справочник
    pub fn apply_region_options(&self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(labels) => {
                let groups = group_regions(&labels);
                if groups.is_empty() {
                    log::warn!("Server returned no regions, using built-in catalog");
                } else {
                    self.region_groups.set(groups);
                }
            }
            Err(e) => {
                log::warn!("Failed to load regions, using built-in catalog: {}", e);
            }
        }
    }

    pub fn load_regions(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_region_options().await;
            vm.apply_region_options(result);
        });
    }

    // ------------------------------------------------------------------
    // Справка
    // ------------------------------------------------------------------

    pub fn open_help(&self) {
        self.help_open.set(true);
    }

    pub fn close_help(&self) {
        self.help_open.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::GENERIC_ERROR;
    use serde_json::json;

    fn fill(vm: &ProductAnalysisVm) {
        vm.article.set("393594116".to_string());
        vm.select_region(vec!["МОСКВА - ЦФО".to_string()]);
        vm.query.set("футболка мужская".to_string());
    }

    fn ok_response(has_promos: serde_json::Value) -> Result<SubmitResponse, ApiError> {
        Ok(serde_json::from_value(json!({
            "article": "393594116",
            "region": "МОСКВА - ЦФО",
            "product_data": {
                "revenue": 1868000,
                "rating": 4.8,
                "reviews_last_day": 25,
                "brand_rating": 4.9,
                "loyalty_level": "Серебряный",
                "has_promos": has_promos,
                "promo_days": 12
            }
        }))
        .unwrap())
    }

    #[test]
    fn test_submit_disabled_until_all_fields_filled() {
        let vm = ProductAnalysisVm::new();
        assert!(!vm.can_submit());

        vm.article.set("393594116".to_string());
        assert!(!vm.can_submit());
        vm.query.set("футболка".to_string());
        assert!(!vm.can_submit());
        vm.select_region(vec!["КАЗАНЬ - ПФО".to_string()]);
        assert!(vm.can_submit());

        vm.article.set(String::new());
        assert!(!vm.can_submit());
    }

    #[test]
    fn test_incomplete_form_is_noop() {
        let vm = ProductAnalysisVm::new();
        vm.article.set("393594116".to_string());
        vm.error.set(Some("старая ошибка".to_string()));

        assert!(vm.begin_submit().is_none());
        assert!(!vm.is_submitting.get_untracked());
        assert_eq!(vm.error.get_untracked().as_deref(), Some("старая ошибка"));
    }

    #[test]
    fn test_begin_submit_sets_busy_and_label() {
        let vm = ProductAnalysisVm::new();
        fill(&vm);
        vm.error.set(Some("старая ошибка".to_string()));
        assert_eq!(vm.submit_label(), "Отправить");

        let request = vm.begin_submit().unwrap();
        assert_eq!(request.region, "МОСКВА - ЦФО");
        assert!(vm.is_submitting.get_untracked());
        assert_eq!(vm.submit_label(), "Отправка...");
        assert!(!vm.can_submit());
        assert!(vm.error.get_untracked().is_none());

        // повторное нажатие во время запроса
        assert!(vm.begin_submit().is_none());
    }

    #[test]
    fn test_successful_submit_appends_row_and_clears_form() {
        let vm = ProductAnalysisVm::new();
        fill(&vm);
        vm.begin_submit().unwrap();
        vm.finish_submit(ok_response(json!(1)));

        let rows = vm.products.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].article, "393594116");
        assert_eq!(rows[0].has_promos, "Да");
        assert_eq!(rows[0].revenue, "1 868 000");

        assert!(vm.article.get_untracked().is_empty());
        assert!(vm.region.get_untracked().is_empty());
        assert!(vm.query.get_untracked().is_empty());
        assert_eq!(vm.success.get_untracked().as_deref(), Some(SUCCESS_MESSAGE));
        assert!(!vm.is_submitting.get_untracked());
        assert_eq!(vm.submit_label(), "Отправить");
    }

    #[test]
    fn test_history_accumulates() {
        let vm = ProductAnalysisVm::new();
        for promos in [json!(1), json!(0)] {
            fill(&vm);
            vm.begin_submit().unwrap();
            vm.finish_submit(ok_response(promos));
        }

        let rows = vm.products.get_untracked();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].has_promos, "Да");
        assert_eq!(rows[1].has_promos, "Нет");
        assert_ne!(rows[0].key, rows[1].key);
    }

    #[test]
    fn test_failed_submit_keeps_rows_and_shows_detail() {
        let vm = ProductAnalysisVm::new();
        fill(&vm);
        vm.begin_submit().unwrap();
        vm.finish_submit(ok_response(json!(1)));

        fill(&vm);
        vm.begin_submit().unwrap();
        vm.finish_submit(Err(ApiError::from_error_body(
            400,
            r#"{"detail":"Артикул должен быть числом"}"#,
        )));

        assert_eq!(vm.products.get_untracked().len(), 1);
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("Артикул должен быть числом")
        );
        assert!(vm.success.get_untracked().is_none());
        assert_eq!(vm.article.get_untracked(), "393594116");
        assert!(!vm.is_submitting.get_untracked());
        assert_eq!(vm.submit_label(), "Отправить");
    }

    #[test]
    fn test_transport_failure_uses_generic_text() {
        let vm = ProductAnalysisVm::new();
        fill(&vm);
        vm.begin_submit().unwrap();
        vm.finish_submit(Err(ApiError::Transport("TypeError: Failed to fetch".into())));

        assert_eq!(vm.error.get_untracked().as_deref(), Some(GENERIC_ERROR));
        assert!(vm.products.get_untracked().is_empty());
    }

    #[test]
    fn test_recommendation_replaces_row() {
        let vm = ProductAnalysisVm::new();
        assert_eq!(vm.recommendation_label(), "Получить рекомендацию");

        for text in ["Первая", "Вторая"] {
            assert!(vm.begin_recommendation());
            assert_eq!(vm.recommendation_label(), "Загрузка...");
            vm.finish_recommendation(Ok(RecommendationResponse {
                recommendation: Some(text.to_string()),
            }));
        }

        let rows = vm.recommendations.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].recomendation, "Вторая");
        assert_eq!(vm.recommendation_label(), "Получить рекомендацию");
    }

    #[test]
    fn test_recommendation_failure_keeps_previous() {
        let vm = ProductAnalysisVm::new();
        vm.begin_recommendation();
        vm.finish_recommendation(Ok(RecommendationResponse {
            recommendation: Some("Снизить цену".to_string()),
        }));

        assert!(vm.begin_recommendation());
        assert!(!vm.begin_recommendation());
        vm.finish_recommendation(Err(ApiError::Server {
            status: 500,
            message: None,
        }));

        let rows = vm.recommendations.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].recomendation, "Снизить цену");
        assert!(!vm.is_loading_recommendation.get_untracked());
        assert!(vm.error.get_untracked().is_none());
    }

    #[test]
    fn test_help_toggle() {
        let vm = ProductAnalysisVm::new();
        assert!(!vm.help_open.get_untracked());
        vm.open_help();
        assert!(vm.help_open.get_untracked());
        vm.close_help();
        assert!(!vm.help_open.get_untracked());
    }

    #[test]
    fn test_region_options() {
        let vm = ProductAnalysisVm::new();
        let catalog = vm.region_groups.get_untracked();

        vm.apply_region_options(Err(ApiError::Transport("offline".into())));
        assert_eq!(vm.region_groups.get_untracked(), catalog);

        vm.apply_region_options(Ok(Vec::new()));
        assert_eq!(vm.region_groups.get_untracked(), catalog);

        vm.apply_region_options(Ok(vec!["ТУЛА - ЦФО".to_string(), "Минск".to_string()]));
        let groups = vm.region_groups.get_untracked();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].district, "Центральный");
        assert_eq!(groups[1].options, vec!["Минск".to_string()]);
    }
}
