use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the athlete/event join table. `score` is kept in its
/// serialized form here; the DTO layer turns it back into JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub id: i64,
    pub athlete_id: i64,
    pub event_id: i64,
    pub score: Option<String>,
    pub remark: Option<String>,
}
