//! fyyur-web library - HTTP front end for the booking directory
//!
//! JSON endpoints for venues, artists and shows, plus the static UI that
//! renders them.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let venues = Router::new()
        .route("/api/venues", get(api::list_venues))
        .route("/api/venues/search", post(api::search_venues))
        .route("/api/venues/create", post(api::create_venue))
        .route(
            "/api/venues/:venue_id",
            get(api::show_venue).delete(api::delete_venue),
        )
        .route(
            "/api/venues/:venue_id/edit",
            get(api::edit_venue).post(api::update_venue),
        );

    let artists = Router::new()
        .route("/api/artists", get(api::list_artists))
        .route("/api/artists/search", post(api::search_artists))
        .route("/api/artists/create", post(api::create_artist))
        .route("/api/artists/:artist_id", get(api::show_artist))
        .route(
            "/api/artists/:artist_id/edit",
            get(api::edit_artist).post(api::update_artist),
        );

    let shows = Router::new()
        .route("/api/shows", get(api::list_shows))
        .route("/api/shows/create", post(api::create_show));

    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes());

    Router::new()
        .merge(venues)
        .merge(artists)
        .merge(shows)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
