//! Artist pages

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use fyyur_common::booking::{artist_detail, search_results, ArtistDetail};
use fyyur_common::db::{self, Artist, NewArtist};
use fyyur_common::time;
use serde::Serialize;
use tracing::info;

use super::{ApiError, SearchForm, SearchResponse, WriteResponse};
use crate::AppState;

/// One entry of the artist index
#[derive(Debug, Serialize)]
pub struct ArtistEntry {
    pub id: i64,
    pub name: String,
}

/// GET /api/artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistEntry>>, ApiError> {
    let artists = db::all_artists(&state.db).await?;

    Ok(Json(
        artists
            .into_iter()
            .map(|a| ArtistEntry { id: a.id, name: a.name })
            .collect(),
    ))
}

/// POST /api/artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResponse>, ApiError> {
    let now = time::now();
    let matches = db::search_artists_by_name(&state.db, &form.search_term).await?;

    Ok(Json(SearchResponse {
        results: search_results(&matches, now),
        search_term: form.search_term,
    }))
}

/// GET /api/artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let now = time::now();
    let entry = db::artist_by_id(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("artist {}", artist_id)))?;

    Ok(Json(artist_detail(entry, now)))
}

/// POST /api/artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Json(artist): Json<NewArtist>,
) -> Result<(StatusCode, Json<WriteResponse>), ApiError> {
    let id = db::insert_artist(&state.db, &artist).await?;
    info!("Listed artist {} ({})", id, artist.name);

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            id,
            message: format!("Artist {} was successfully listed!", artist.name),
        }),
    ))
}

/// GET /api/artists/:artist_id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<Json<Artist>, ApiError> {
    let artist = db::find_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("artist {}", artist_id)))?;

    Ok(Json(artist))
}

/// POST /api/artists/:artist_id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Json(artist): Json<NewArtist>,
) -> Result<Json<WriteResponse>, ApiError> {
    db::update_artist(&state.db, artist_id, &artist).await?;
    info!("Updated artist {}", artist_id);

    Ok(Json(WriteResponse {
        id: artist_id,
        message: format!("Artist {} was successfully updated!", artist.name),
    }))
}
