use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct News {
    pub id: i64,
    pub topic: String,
    pub content_text: String,
    pub picture: Option<String>,
    pub remark: Option<String>,
    pub date_time: Option<chrono::NaiveDateTime>,
}
