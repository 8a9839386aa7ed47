use sqlx::MySqlPool;
use storage::{
    dto::competition::{
        AthleteCompetitionRow, CreateCompetitionRequest, EventCompetitionRow,
        UpdateCompetitionRequest,
    },
    error::{Result, StorageError},
    models::Competition,
    repository::{
        athlete::AthleteRepository, competition::CompetitionRepository, event::EventRepository,
    },
};

/// Competition entries of one athlete. A missing athlete is 404; an athlete
/// with no entries yields an empty list.
pub async fn list_by_athlete(
    pool: &MySqlPool,
    athlete_id: i64,
) -> Result<Vec<AthleteCompetitionRow>> {
    if !AthleteRepository::new(pool).exists(athlete_id).await? {
        return Err(StorageError::NotFound);
    }

    CompetitionRepository::new(pool)
        .list_by_athlete(athlete_id)
        .await
}

/// Participants of one event, same not-found rule as [`list_by_athlete`].
pub async fn list_by_event(pool: &MySqlPool, event_id: i64) -> Result<Vec<EventCompetitionRow>> {
    if !EventRepository::new(pool).exists(event_id).await? {
        return Err(StorageError::NotFound);
    }

    CompetitionRepository::new(pool).list_by_event(event_id).await
}

/// Enter an athlete into an event
pub async fn create_competition(
    pool: &MySqlPool,
    req: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.create(req).await
}

/// Replace a competition entry
pub async fn update_competition(
    pool: &MySqlPool,
    id: i64,
    req: &UpdateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.update(id, req).await
}

/// Delete a competition entry
pub async fn delete_competition(pool: &MySqlPool, id: i64) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    repo.delete(id).await
}
