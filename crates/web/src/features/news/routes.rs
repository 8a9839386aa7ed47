use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_news, delete_news, get_news, list_news, update_news};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_news))
        .route("/", post(create_news))
        .route("/:id", get(get_news))
        .route("/:id", put(update_news))
        .route("/:id", delete(delete_news))
}
