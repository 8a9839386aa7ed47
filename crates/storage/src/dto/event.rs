use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Event;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub event_name: Option<String>,
    pub event_class: Option<String>,
    pub event_description: Option<String>,
    pub event_date_time: chrono::NaiveDateTime,
    pub event_gender: Option<String>,
    pub status: Option<String>,
    pub event_location: Option<String>,
    pub sport_id: Option<i64>,
}

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(max = 255))]
    pub event_name: Option<String>,

    #[validate(length(max = 255))]
    pub event_class: Option<String>,

    pub event_description: Option<String>,

    #[validate(required(message = "event_date_time is required"))]
    pub event_date_time: Option<chrono::NaiveDateTime>,

    pub event_gender: Option<String>,
    pub status: Option<String>,
    pub event_location: Option<String>,
    pub sport_id: Option<i64>,
}

/// Request payload for partially updating an event. Only fields present in
/// the body end up in the SET clause.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(max = 255))]
    pub event_name: Option<String>,

    #[validate(length(max = 255))]
    pub event_class: Option<String>,

    pub event_description: Option<String>,
    pub event_date_time: Option<chrono::NaiveDateTime>,
    pub event_gender: Option<String>,
    pub status: Option<String>,
    pub event_location: Option<String>,
    pub sport_id: Option<i64>,
}

impl UpdateEventRequest {
    pub fn is_empty(&self) -> bool {
        self.event_name.is_none()
            && self.event_class.is_none()
            && self.event_description.is_none()
            && self.event_date_time.is_none()
            && self.event_gender.is_none()
            && self.status.is_none()
            && self.event_location.is_none()
            && self.sport_id.is_none()
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            event_name: event.event_name,
            event_class: event.event_class,
            event_description: event.event_description,
            event_date_time: event.event_date_time,
            event_gender: event.event_gender,
            status: event.status,
            event_location: event.event_location,
            sport_id: event.sport_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_without_date_time_is_rejected() {
        let req: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "event_name": "100m final"
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("event_date_time"));
    }

    #[test]
    fn create_with_date_time_is_valid() {
        let req: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "event_date_time": "2024-06-01T09:30:00"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_is_empty_detects_missing_fields() {
        let empty: UpdateEventRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.is_empty());

        let partial: UpdateEventRequest = serde_json::from_value(serde_json::json!({
            "status": "finished"
        }))
        .unwrap();
        assert!(!partial.is_empty());
    }
}
