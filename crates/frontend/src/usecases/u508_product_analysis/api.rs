use crate::shared::api_utils::{api_url, read_json, ApiError};
use contracts::usecases::u508_product_analysis::{
    RecommendationResponse, SubmitRequest, SubmitResponse, RECOMMENDATION_PATH,
    REGION_OPTIONS_PATH, SUBMIT_PATH,
};
use gloo_net::http::Request;

/// Отправить артикул, регион и запрос на анализ
pub async fn submit_request(request: &SubmitRequest) -> Result<SubmitResponse, ApiError> {
    log::debug!(
        "POST {}: article={}, region={}, query={}",
        SUBMIT_PATH,
        request.article,
        request.region,
        request.query
    );

    let response = Request::post(&api_url(SUBMIT_PATH))
        .header("Accept", "application/json")
        .json(request)?
        .send()
        .await?;

    read_json(response).await
}

/// Получить рекомендацию по последнему обработанному товару
pub async fn fetch_recommendation() -> Result<RecommendationResponse, ApiError> {
    log::debug!("GET {}", RECOMMENDATION_PATH);

    let response = Request::get(&api_url(RECOMMENDATION_PATH))
        .header("Accept", "application/json")
        .send()
        .await?;

    read_json(response).await
}

/// Список регионов, поддерживаемых сервером
pub async fn fetch_region_options() -> Result<Vec<String>, ApiError> {
    let response = Request::get(&api_url(REGION_OPTIONS_PATH))
        .header("Accept", "application/json")
        .send()
        .await?;

    read_json(response).await
}
