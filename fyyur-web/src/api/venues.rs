//! Venue pages
//!
//! Each handler captures `now` once and passes it to every booking call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use fyyur_common::booking::{group_venues_by_area, search_results, venue_detail, Area, VenueDetail};
use fyyur_common::db::{self, NewVenue, Venue};
use fyyur_common::time;
use tracing::info;

use super::{ApiError, SearchForm, SearchResponse, WriteResponse};
use crate::AppState;

/// GET /api/venues
///
/// Venues grouped by (city, state) with upcoming show counts.
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<Area>>, ApiError> {
    let now = time::now();
    let venues = db::all_venues_with_shows(&state.db).await?;
    Ok(Json(group_venues_by_area(&venues, now)))
}

/// POST /api/venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResponse>, ApiError> {
    let now = time::now();
    let matches = db::search_venues_by_name(&state.db, &form.search_term).await?;

    Ok(Json(SearchResponse {
        results: search_results(&matches, now),
        search_term: form.search_term,
    }))
}

/// GET /api/venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<VenueDetail>, ApiError> {
    let now = time::now();
    let entry = db::venue_by_id(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("venue {}", venue_id)))?;

    Ok(Json(venue_detail(entry, now)))
}

/// POST /api/venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    Json(venue): Json<NewVenue>,
) -> Result<(StatusCode, Json<WriteResponse>), ApiError> {
    let id = db::insert_venue(&state.db, &venue).await?;
    info!("Listed venue {} ({})", id, venue.name);

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            id,
            message: format!("Venue {} was successfully listed!", venue.name),
        }),
    ))
}

/// GET /api/venues/:venue_id/edit
///
/// Current record, used to prefill the edit form.
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<Venue>, ApiError> {
    let venue = db::find_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("venue {}", venue_id)))?;

    Ok(Json(venue))
}

/// POST /api/venues/:venue_id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Json(venue): Json<NewVenue>,
) -> Result<Json<WriteResponse>, ApiError> {
    db::update_venue(&state.db, venue_id, &venue).await?;
    info!("Updated venue {}", venue_id);

    Ok(Json(WriteResponse {
        id: venue_id,
        message: format!("Venue {} was successfully updated!", venue.name),
    }))
}

/// DELETE /api/venues/:venue_id
///
/// Removes the venue and every show booked there.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<WriteResponse>, ApiError> {
    db::delete_venue(&state.db, venue_id).await?;
    info!("Deleted venue {}", venue_id);

    Ok(Json(WriteResponse {
        id: venue_id,
        message: format!("Venue {} was successfully deleted!", venue_id),
    }))
}
