use sqlx::MySqlPool;
use storage::{
    dto::event::{CreateEventRequest, UpdateEventRequest},
    error::Result,
    models::Event,
    repository::event::EventRepository,
};

/// List all events
pub async fn list_events(pool: &MySqlPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Get event by ID
pub async fn get_event(pool: &MySqlPool, id: i64) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new event
pub async fn create_event(pool: &MySqlPool, req: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(req).await
}

/// Apply a partial update to an event
pub async fn update_event(pool: &MySqlPool, id: i64, req: &UpdateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.update(id, req).await
}

/// Delete an event
pub async fn delete_event(pool: &MySqlPool, id: i64) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.delete(id).await
}
