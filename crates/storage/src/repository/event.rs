use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

const EVENT_COLUMNS: &str = "id, event_name, event_class, event_description, \
     event_date_time, event_gender, status, event_location, sport_id";

pub struct EventRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all events
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!("SELECT {EVENT_COLUMNS} FROM events"))
            .fetch_all(self.pool)
            .await?;

        Ok(events)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Create a new event and return the stored row
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let result = sqlx::query(
            "INSERT INTO events (event_name, event_class, event_description, \
             event_date_time, event_gender, status, event_location, sport_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&req.event_name)
        .bind(&req.event_class)
        .bind(&req.event_description)
        .bind(req.event_date_time)
        .bind(&req.event_gender)
        .bind(&req.status)
        .bind(&req.event_location)
        .bind(req.sport_id)
        .execute(self.pool)
        .await?;

        self.find_by_id(result.last_insert_id() as i64).await
    }

    /// Partial update: the SET clause only carries fields present in the
    /// request body. Callers reject empty bodies before getting here.
    pub async fn update(&self, id: i64, req: &UpdateEventRequest) -> Result<Event> {
        let mut query = QueryBuilder::<MySql>::new("UPDATE events SET ");
        let mut set = query.separated(", ");

        if let Some(ref event_name) = req.event_name {
            set.push("event_name = ");
            set.push_bind_unseparated(event_name);
        }
        if let Some(ref event_class) = req.event_class {
            set.push("event_class = ");
            set.push_bind_unseparated(event_class);
        }
        if let Some(ref event_description) = req.event_description {
            set.push("event_description = ");
            set.push_bind_unseparated(event_description);
        }
        if let Some(event_date_time) = req.event_date_time {
            set.push("event_date_time = ");
            set.push_bind_unseparated(event_date_time);
        }
        if let Some(ref event_gender) = req.event_gender {
            set.push("event_gender = ");
            set.push_bind_unseparated(event_gender);
        }
        if let Some(ref status) = req.status {
            set.push("status = ");
            set.push_bind_unseparated(status);
        }
        if let Some(ref event_location) = req.event_location {
            set.push("event_location = ");
            set.push_bind_unseparated(event_location);
        }
        if let Some(sport_id) = req.sport_id {
            set.push("sport_id = ");
            set.push_bind_unseparated(sport_id);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Delete an event by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Check whether an event row exists
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}
