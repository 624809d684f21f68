//! Show listing and booking

use axum::{extract::State, http::StatusCode, Json};
use fyyur_common::booking::{self, ShowRow};
use fyyur_common::db::{self, NewShow};
use tracing::info;

use super::{ApiError, WriteResponse};
use crate::AppState;

/// GET /api/shows
///
/// Every show, past and upcoming, in booking order.
pub async fn list_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowRow>>, ApiError> {
    let shows = db::all_show_listings(&state.db).await?;
    Ok(Json(booking::list_shows(&shows)))
}

/// POST /api/shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Json(show): Json<NewShow>,
) -> Result<(StatusCode, Json<WriteResponse>), ApiError> {
    let id = db::insert_show(&state.db, &show).await?;
    info!(
        "Listed show {} (artist {} at venue {})",
        id, show.artist_id, show.venue_id
    );

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            id,
            message: "Show was successfully listed!".to_string(),
        }),
    ))
}
