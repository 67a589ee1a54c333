use serde::{Deserialize, Serialize};

/// Значение пикера регионов.
///
/// Иерархический пикер отдаёт список выбранных значений, старые клиенты
/// присылают одну строку. На сервер всегда уходит одна строка (см. [`RegionValue::normalize`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionValue {
    Single(String),
    Multiple(Vec<String>),
}

impl Default for RegionValue {
    fn default() -> Self {
        RegionValue::Multiple(Vec::new())
    }
}

impl RegionValue {
    /// Первое выбранное значение (или пустая строка, если ничего не выбрано)
    pub fn normalize(&self) -> String {
        match self {
            RegionValue::Single(value) => value.clone(),
            RegionValue::Multiple(values) => values.first().cloned().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalize().is_empty()
    }
}

impl From<&str> for RegionValue {
    fn from(value: &str) -> Self {
        RegionValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for RegionValue {
    fn from(values: Vec<String>) -> Self {
        RegionValue::Multiple(values)
    }
}

/// Тело запроса POST /submit-request/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Артикул товара
    pub article: String,
    /// Регион (одна строка, например "МОСКВА - ЦФО")
    pub region: String,
    /// Поисковый запрос
    pub query: String,
}

impl SubmitRequest {
    pub fn new(article: impl Into<String>, region: &RegionValue, query: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            region: region.normalize(),
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_takes_first_selected() {
        let region = RegionValue::Multiple(vec![
            "КАЗАНЬ - ПФО".to_string(),
            "МОСКВА - ЦФО".to_string(),
        ]);
        assert_eq!(region.normalize(), "КАЗАНЬ - ПФО");
        assert_eq!(RegionValue::from("МОСКВА - ЦФО").normalize(), "МОСКВА - ЦФО");
    }

    #[test]
    fn test_empty_selection() {
        assert!(RegionValue::default().is_empty());
        assert!(RegionValue::from("").is_empty());
        assert!(!RegionValue::from(vec!["ХАБАРОВСК - ДФО".to_string()]).is_empty());
    }

    #[test]
    fn test_region_value_accepts_string_or_list() {
        let single: RegionValue = serde_json::from_str(r#""КРАСНОДАР - ЮФО""#).unwrap();
        assert_eq!(single, RegionValue::Single("КРАСНОДАР - ЮФО".to_string()));

        let list: RegionValue = serde_json::from_str(r#"["КРАСНОДАР - ЮФО"]"#).unwrap();
        assert_eq!(list.normalize(), "КРАСНОДАР - ЮФО");
    }

    #[test]
    fn test_submit_request_sends_scalar_region() {
        let region = RegionValue::Multiple(vec!["МОСКВА - ЦФО".to_string()]);
        let request = SubmitRequest::new("393594116", &region, "футболка мужская");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "article": "393594116",
                "region": "МОСКВА - ЦФО",
                "query": "футболка мужская"
            })
        );
    }
}
