use sqlx::MySqlPool;
use storage::{
    dto::news::{CreateNewsRequest, UpdateNewsRequest},
    error::Result,
    models::News,
    repository::news::NewsRepository,
};

/// List all news items
pub async fn list_news(pool: &MySqlPool) -> Result<Vec<News>> {
    let repo = NewsRepository::new(pool);
    repo.list().await
}

/// Get news item by ID
pub async fn get_news(pool: &MySqlPool, id: i64) -> Result<News> {
    let repo = NewsRepository::new(pool);
    repo.find_by_id(id).await
}

/// Publish a news item
pub async fn create_news(pool: &MySqlPool, req: &CreateNewsRequest) -> Result<News> {
    let repo = NewsRepository::new(pool);
    repo.create(req).await
}

/// Apply a partial update to a news item
pub async fn update_news(pool: &MySqlPool, id: i64, req: &UpdateNewsRequest) -> Result<News> {
    let repo = NewsRepository::new(pool);
    repo.update(id, req).await
}

/// Delete a news item
pub async fn delete_news(pool: &MySqlPool, id: i64) -> Result<()> {
    let repo = NewsRepository::new(pool);
    repo.delete(id).await
}
