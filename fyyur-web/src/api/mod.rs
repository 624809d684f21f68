//! HTTP API handlers for fyyur-web

pub mod artists;
pub mod error;
pub mod health;
pub mod shows;
pub mod ui;
pub mod venues;

use serde::{Deserialize, Serialize};

pub use artists::{
    create_artist, edit_artist, list_artists, search_artists, show_artist, update_artist,
};
pub use error::ApiError;
pub use health::health_routes;
pub use shows::{create_show, list_shows};
pub use ui::{serve_app_js, serve_index};
pub use venues::{
    create_venue, delete_venue, edit_venue, list_venues, search_venues, show_venue, update_venue,
};

/// Form body of the search boxes
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Search response echoing the term back for the results page
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_term: String,
    pub results: fyyur_common::booking::SearchResults,
}

/// Result of a create, edit or delete
#[derive(Debug, Serialize)]
pub struct WriteResponse {
    pub id: i64,
    pub message: String,
}
