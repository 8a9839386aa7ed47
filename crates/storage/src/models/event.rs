use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
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
