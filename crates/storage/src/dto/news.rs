use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::News;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsResponse {
    pub id: i64,
    pub topic: String,
    pub content_text: String,
    pub picture: Option<String>,
    pub remark: Option<String>,
    pub date_time: Option<chrono::NaiveDateTime>,
}

/// Request payload for publishing a news item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsRequest {
    #[validate(required(message = "topic is required"), length(min = 1, max = 255))]
    pub topic: Option<String>,

    #[validate(required(message = "content_text is required"), length(min = 1))]
    pub content_text: Option<String>,

    pub picture: Option<String>,
    pub remark: Option<String>,
    pub date_time: Option<chrono::NaiveDateTime>,
}

/// Request payload for partially updating a news item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 255))]
    pub topic: Option<String>,

    #[validate(length(min = 1))]
    pub content_text: Option<String>,

    pub picture: Option<String>,
    pub remark: Option<String>,
    pub date_time: Option<chrono::NaiveDateTime>,
}

impl UpdateNewsRequest {
    pub fn is_empty(&self) -> bool {
        self.topic.is_none()
            && self.content_text.is_none()
            && self.picture.is_none()
            && self.remark.is_none()
            && self.date_time.is_none()
    }
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            topic: news.topic,
            content_text: news.content_text,
            picture: news.picture,
            remark: news.remark,
            date_time: news.date_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_topic_and_content() {
        let req: CreateNewsRequest =
            serde_json::from_value(serde_json::json!({"picture": "p.jpg"})).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("topic"));
        assert!(errors.field_errors().contains_key("content_text"));
    }

    #[test]
    fn update_is_empty_detects_missing_fields() {
        let empty: UpdateNewsRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.is_empty());

        let partial: UpdateNewsRequest =
            serde_json::from_value(serde_json::json!({"topic": "Results"})).unwrap();
        assert!(!partial.is_empty());
    }
}
