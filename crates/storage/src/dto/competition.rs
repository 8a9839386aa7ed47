use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Competition;

/// Turn a stored score column back into JSON. Rows written before scores
/// were serialized as JSON fall back to a plain string.
fn parse_score(raw: Option<String>) -> Option<serde_json::Value> {
    raw.map(|s| serde_json::from_str(&s).unwrap_or(serde_json::Value::String(s)))
}

/// Serialize a score for storage.
pub fn serialize_score(score: Option<&serde_json::Value>) -> Option<String> {
    score.map(|v| v.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub id: i64,
    pub athlete_id: i64,
    pub event_id: i64,
    #[schema(value_type = Object)]
    pub score: Option<serde_json::Value>,
    pub remark: Option<String>,
}

/// One competition entry of an athlete, denormalized with event fields
#[derive(Debug, Clone, FromRow)]
pub struct AthleteCompetitionRow {
    pub id: i64,
    pub event_name: Option<String>,
    pub event_class: Option<String>,
    pub event_date_time: chrono::NaiveDateTime,
    pub event_gender: Option<String>,
    pub status: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub bib: Option<String>,
    pub country: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub score: Option<String>,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteCompetitionEntry {
    pub id: i64,
    pub event_name: Option<String>,
    pub event_class: Option<String>,
    pub event_date_time: chrono::NaiveDateTime,
    pub event_gender: Option<String>,
    pub status: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub bib: Option<String>,
    pub country: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[schema(value_type = Object)]
    pub score: Option<serde_json::Value>,
    pub remark: Option<String>,
}

/// One participant of an event, denormalized with athlete fields
#[derive(Debug, Clone, FromRow)]
pub struct EventCompetitionRow {
    pub id: i64,
    pub athlete_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub bib: Option<String>,
    pub country: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub score: Option<String>,
    pub remark: Option<String>,
    pub event_id: i64,
    pub event_name: Option<String>,
    pub event_class: Option<String>,
    pub event_description: Option<String>,
    pub event_date_time: chrono::NaiveDateTime,
    pub event_gender: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventCompetitionEntry {
    pub id: i64,
    pub athlete_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub bib: Option<String>,
    pub country: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    #[schema(value_type = Object)]
    pub score: Option<serde_json::Value>,
    pub remark: Option<String>,
    pub event_id: i64,
    pub event_name: Option<String>,
    pub event_class: Option<String>,
    pub event_description: Option<String>,
    pub event_date_time: chrono::NaiveDateTime,
    pub event_gender: Option<String>,
    pub status: Option<String>,
}

/// Request payload for entering an athlete into an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(required(message = "athlete_id is required"))]
    pub athlete_id: Option<i64>,

    #[validate(required(message = "event_id is required"))]
    pub event_id: Option<i64>,

    #[schema(value_type = Object)]
    pub score: Option<serde_json::Value>,
    pub remark: Option<String>,
}

/// Request payload for replacing a competition entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompetitionRequest {
    pub athlete_id: Option<i64>,
    pub event_id: Option<i64>,

    #[schema(value_type = Object)]
    pub score: Option<serde_json::Value>,
    pub remark: Option<String>,
}

impl From<Competition> for CompetitionResponse {
    fn from(row: Competition) -> Self {
        Self {
            id: row.id,
            athlete_id: row.athlete_id,
            event_id: row.event_id,
            score: parse_score(row.score),
            remark: row.remark,
        }
    }
}

impl From<AthleteCompetitionRow> for AthleteCompetitionEntry {
    fn from(row: AthleteCompetitionRow) -> Self {
        Self {
            id: row.id,
            event_name: row.event_name,
            event_class: row.event_class,
            event_date_time: row.event_date_time,
            event_gender: row.event_gender,
            status: row.status,
            first_name: row.first_name,
            last_name: row.last_name,
            bib: row.bib,
            country: row.country,
            date_of_birth: row.date_of_birth,
            score: parse_score(row.score),
            remark: row.remark,
        }
    }
}

impl From<EventCompetitionRow> for EventCompetitionEntry {
    fn from(row: EventCompetitionRow) -> Self {
        Self {
            id: row.id,
            athlete_id: row.athlete_id,
            first_name: row.first_name,
            last_name: row.last_name,
            bib: row.bib,
            country: row.country,
            date_of_birth: row.date_of_birth,
            score: parse_score(row.score),
            remark: row.remark,
            event_id: row.event_id,
            event_name: row.event_name,
            event_class: row.event_class,
            event_description: row.event_description,
            event_date_time: row.event_date_time,
            event_gender: row.event_gender,
            status: row.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_round_trips_through_storage_form() {
        let score = json!({"points": 10});
        let stored = serialize_score(Some(&score));
        assert_eq!(stored.as_deref(), Some(r#"{"points":10}"#));
        assert_eq!(parse_score(stored), Some(score));
    }

    #[test]
    fn missing_score_stays_null() {
        assert_eq!(serialize_score(None), None);
        assert_eq!(parse_score(None), None);
    }

    #[test]
    fn legacy_non_json_score_becomes_a_string() {
        let parsed = parse_score(Some("12.5 first heat".into()));
        assert_eq!(parsed, Some(json!("12.5 first heat")));
    }

    #[test]
    fn create_requires_both_foreign_keys() {
        let req: CreateCompetitionRequest = serde_json::from_value(json!({
            "score": {"points": 10}
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("athlete_id"));
        assert!(errors.field_errors().contains_key("event_id"));
    }
}
