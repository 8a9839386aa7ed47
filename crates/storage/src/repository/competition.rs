use sqlx::MySqlPool;

use crate::dto::competition::{
    AthleteCompetitionRow, CreateCompetitionRequest, EventCompetitionRow,
    UpdateCompetitionRequest, serialize_score,
};
use crate::error::{Result, StorageError};
use crate::models::Competition;

pub struct CompetitionRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All competition entries of one athlete, denormalized with event fields
    pub async fn list_by_athlete(&self, athlete_id: i64) -> Result<Vec<AthleteCompetitionRow>> {
        let rows = sqlx::query_as::<_, AthleteCompetitionRow>(
            "SELECT c.id, e.event_name, e.event_class, e.event_date_time, \
             e.event_gender, e.status, a.first_name, a.last_name, a.bib, a.country, \
             a.date_of_birth, c.score, c.remark \
             FROM competes_in c \
             JOIN athlete a ON c.athlete_id = a.id \
             JOIN events e ON c.event_id = e.id \
             WHERE c.athlete_id = ?",
        )
        .bind(athlete_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// All participants of one event, denormalized with athlete fields
    pub async fn list_by_event(&self, event_id: i64) -> Result<Vec<EventCompetitionRow>> {
        let rows = sqlx::query_as::<_, EventCompetitionRow>(
            "SELECT c.id, a.id AS athlete_id, a.first_name, a.last_name, a.bib, \
             a.country, a.date_of_birth, c.score, c.remark, e.id AS event_id, \
             e.event_name, e.event_class, e.event_description, e.event_date_time, \
             e.event_gender, e.status \
             FROM competes_in c \
             JOIN athlete a ON c.athlete_id = a.id \
             JOIN events e ON c.event_id = e.id \
             WHERE c.event_id = ?",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Competition> {
        let row = sqlx::query_as::<_, Competition>(
            "SELECT id, athlete_id, event_id, score, remark FROM competes_in WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(row)
    }

    /// Create a competition entry and return the stored row
    pub async fn create(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let result = sqlx::query(
            "INSERT INTO competes_in (athlete_id, event_id, score, remark) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(req.athlete_id)
        .bind(req.event_id)
        .bind(serialize_score(req.score.as_ref()))
        .bind(&req.remark)
        .execute(self.pool)
        .await?;

        self.find_by_id(result.last_insert_id() as i64).await
    }

    /// Full replacement of a competition entry
    pub async fn update(&self, id: i64, req: &UpdateCompetitionRequest) -> Result<Competition> {
        let result = sqlx::query(
            "UPDATE competes_in SET athlete_id = ?, event_id = ?, score = ?, remark = ? \
             WHERE id = ?",
        )
        .bind(req.athlete_id)
        .bind(req.event_id)
        .bind(serialize_score(req.score.as_ref()))
        .bind(&req.remark)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Delete a competition entry by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM competes_in WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
