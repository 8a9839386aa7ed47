use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_competition, delete_competition, list_by_athlete, list_by_event, update_competition,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/athletes/:athlete_id", get(list_by_athlete))
        .route("/events/:event_id", get(list_by_event))
        .route("/", post(create_competition))
        .route("/:id", put(update_competition))
        .route("/:id", delete(delete_competition))
}
