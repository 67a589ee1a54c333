pub mod regions;
pub mod request;
pub mod response;

pub use regions::{default_region_labels, group_regions, RegionGroup, RegionInfo, REGIONS};
pub use request::{RegionValue, SubmitRequest};
pub use response::{ErrorBody, ProductData, RecommendationResponse, SubmitResponse};

use crate::usecases::common::UseCaseMetadata;

/// Отправка артикула на анализ
pub const SUBMIT_PATH: &str = "/submit-request/";
/// Рекомендация по последнему проанализированному товару
pub const RECOMMENDATION_PATH: &str = "/get-recommendation/";
/// Список регионов для пикера
pub const REGION_OPTIONS_PATH: &str = "/region-options/";

pub struct ProductAnalysis;

impl UseCaseMetadata for ProductAnalysis {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "product_analysis"
    }

    fn display_name() -> &'static str {
        "Анализ товара Wildberries"
    }

    fn description() -> &'static str {
        "Показатели товара по артикулу, региону и поисковому запросу, рекомендации по улучшению позиции"
    }
}
