use sqlx::MySqlPool;
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// List all athletes
pub async fn list_athletes(pool: &MySqlPool) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &MySqlPool, id: i64) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete
pub async fn create_athlete(pool: &MySqlPool, req: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.create(req).await
}

/// Replace an athlete row
pub async fn update_athlete(
    pool: &MySqlPool,
    id: i64,
    req: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.update(id, req).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &MySqlPool, id: i64) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
