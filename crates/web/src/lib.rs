use axum::{Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::competitions::handlers::list_by_athlete,
        features::competitions::handlers::list_by_event,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::competitions::handlers::delete_competition,
        features::news::handlers::list_news,
        features::news::handlers::get_news,
        features::news::handlers::create_news,
        features::news::handlers::update_news,
        features::news::handlers::delete_news,
    ),
    components(
        schemas(
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::event::EventResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::competition::AthleteCompetitionEntry,
            storage::dto::competition::EventCompetitionEntry,
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::UpdateCompetitionRequest,
            storage::dto::news::NewsResponse,
            storage::dto::news::CreateNewsRequest,
            storage::dto::news::UpdateNewsRequest,
            storage::models::Athlete,
            storage::models::Event,
            storage::models::Competition,
            storage::models::News,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete management endpoints"),
        (name = "events", description = "Event management endpoints"),
        (name = "competitions", description = "Athlete/event competition entries"),
        (name = "news", description = "News endpoints"),
    )
)]
pub struct ApiDoc;

async fn root() -> &'static str {
    "Para Sports API"
}

/// Assemble the full application router around one shared database handle.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/athletes", features::athletes::routes::routes())
        .nest("/events", features::events::routes::routes())
        .nest("/competitions", features::competitions::routes::routes())
        .nest("/news", features::news::routes::routes());

    Router::new()
        .route("/", get(root))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(cors)
        .with_state(db)
}
