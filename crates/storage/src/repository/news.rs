use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::dto::news::{CreateNewsRequest, UpdateNewsRequest};
use crate::error::{Result, StorageError};
use crate::models::News;

const NEWS_COLUMNS: &str = "id, topic, content_text, picture, remark, date_time";

pub struct NewsRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> NewsRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all news items
    pub async fn list(&self) -> Result<Vec<News>> {
        let news = sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news"))
            .fetch_all(self.pool)
            .await?;

        Ok(news)
    }

    /// Find news item by ID
    pub async fn find_by_id(&self, id: i64) -> Result<News> {
        let news = sqlx::query_as::<_, News>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(news)
    }

    /// Create a news item and return the stored row
    pub async fn create(&self, req: &CreateNewsRequest) -> Result<News> {
        let result = sqlx::query(
            "INSERT INTO news (topic, content_text, picture, remark, date_time) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&req.topic)
        .bind(&req.content_text)
        .bind(&req.picture)
        .bind(&req.remark)
        .bind(req.date_time)
        .execute(self.pool)
        .await?;

        self.find_by_id(result.last_insert_id() as i64).await
    }

    /// Partial update with every value bound as a parameter. Callers reject
    /// empty bodies before getting here.
    pub async fn update(&self, id: i64, req: &UpdateNewsRequest) -> Result<News> {
        let mut query = QueryBuilder::<MySql>::new("UPDATE news SET ");
        let mut set = query.separated(", ");

        if let Some(ref topic) = req.topic {
            set.push("topic = ");
            set.push_bind_unseparated(topic);
        }
        if let Some(ref content_text) = req.content_text {
            set.push("content_text = ");
            set.push_bind_unseparated(content_text);
        }
        if let Some(ref picture) = req.picture {
            set.push("picture = ");
            set.push_bind_unseparated(picture);
        }
        if let Some(ref remark) = req.remark {
            set.push("remark = ");
            set.push_bind_unseparated(remark);
        }
        if let Some(date_time) = req.date_time {
            set.push("date_time = ");
            set.push_bind_unseparated(date_time);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Delete a news item by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
