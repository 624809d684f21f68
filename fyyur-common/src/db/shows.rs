//! Show queries
//!
//! Shows are always read joined with their artist and venue.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::models::{NewShow, Party, ShowListing};
use crate::{Error, Result};

const LISTING_SELECT: &str = r#"
    SELECT s.id AS show_id, s.start_time,
           a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link
    FROM shows s
    JOIN artists a ON a.id = s.artist_id
    JOIN venues v ON v.id = s.venue_id
"#;

fn listing_from_row(row: &SqliteRow) -> Result<ShowListing> {
    Ok(ShowListing {
        id: row.try_get("show_id")?,
        start_time: row.try_get("start_time")?,
        artist: Party {
            id: row.try_get("artist_id")?,
            name: row.try_get("artist_name")?,
            image_link: row.try_get("artist_image_link")?,
        },
        venue: Party {
            id: row.try_get("venue_id")?,
            name: row.try_get("venue_name")?,
            image_link: row.try_get("venue_image_link")?,
        },
    })
}

/// Every show, in id order
pub async fn all_show_listings(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(&format!("{} ORDER BY s.id ASC", LISTING_SELECT))
        .fetch_all(pool)
        .await?;

    rows.iter().map(listing_from_row).collect()
}

/// Shows booked at one venue, in id order
pub async fn listings_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(&format!("{} WHERE s.venue_id = ? ORDER BY s.id ASC", LISTING_SELECT))
        .bind(venue_id)
        .fetch_all(pool)
        .await?;

    rows.iter().map(listing_from_row).collect()
}

/// Shows played by one artist, in id order
pub async fn listings_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(&format!("{} WHERE s.artist_id = ? ORDER BY s.id ASC", LISTING_SELECT))
        .bind(artist_id)
        .fetch_all(pool)
        .await?;

    rows.iter().map(listing_from_row).collect()
}

/// Book an artist at a venue; returns the new show id
pub async fn insert_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let artist_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(show.artist_id)
        .fetch_one(pool)
        .await?;
    if !artist_exists {
        return Err(Error::NotFound(format!("artist {}", show.artist_id)));
    }

    let venue_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(show.venue_id)
        .fetch_one(pool)
        .await?;
    if !venue_exists {
        return Err(Error::NotFound(format!("venue {}", show.venue_id)));
    }

    let result = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}
