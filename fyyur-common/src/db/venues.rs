//! Venue queries and writes

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::models::{NewVenue, ShowListing, Venue, VenueWithShows};
use super::shows::{all_show_listings, listings_for_venue};
use crate::booking::name_matches;
use crate::genre;
use crate::{Error, Result};

const VENUE_COLUMNS: &str = "id, name, genres, address, city, state, phone, website, \
                             facebook_link, seeking_talent, seeking_description, image_link";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: Option<String> = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: genre::parse_db_string(genres.as_deref())?,
        address: row.try_get("address")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
        image_link: row.try_get("image_link")?,
    })
}

/// Every venue, in id order
pub async fn all_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("SELECT {} FROM venues ORDER BY id ASC", VENUE_COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(venue_from_row).collect()
}

/// Every venue with its shows attached
pub async fn all_venues_with_shows(pool: &SqlitePool) -> Result<Vec<VenueWithShows>> {
    let venues = all_venues(pool).await?;

    let mut by_venue: HashMap<i64, Vec<ShowListing>> = HashMap::new();
    for show in all_show_listings(pool).await? {
        by_venue.entry(show.venue.id).or_default().push(show);
    }

    Ok(venues
        .into_iter()
        .map(|venue| {
            let shows = by_venue.remove(&venue.id).unwrap_or_default();
            VenueWithShows { venue, shows }
        })
        .collect())
}

/// Venue record without shows
pub async fn find_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// Venue with its shows, or `None` for an unknown id
pub async fn venue_by_id(pool: &SqlitePool, id: i64) -> Result<Option<VenueWithShows>> {
    let Some(venue) = find_venue(pool, id).await? else {
        return Ok(None);
    };
    let shows = listings_for_venue(pool, id).await?;

    Ok(Some(VenueWithShows { venue, shows }))
}

/// Venues whose name contains `term`, ignoring case, in id order
pub async fn search_venues_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<VenueWithShows>> {
    let matches: Vec<VenueWithShows> = all_venues_with_shows(pool)
        .await?
        .into_iter()
        .filter(|entry| name_matches(&entry.venue.name, term))
        .collect();

    debug!("Venue search {:?} matched {}", term, matches.len());
    Ok(matches)
}

/// Insert a venue; returns the new id
pub async fn insert_venue(pool: &SqlitePool, venue: &NewVenue) -> Result<i64> {
    venue.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO venues (name, genres, address, city, state, phone, website,
                            facebook_link, seeking_talent, seeking_description, image_link)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(genre::to_db_string(&venue.genres)?)
    .bind(&venue.address)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.phone)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(&venue.image_link)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Replace every editable field of a venue
pub async fn update_venue(pool: &SqlitePool, id: i64, venue: &NewVenue) -> Result<()> {
    venue.validate()?;

    let result = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, genres = ?, address = ?, city = ?, state = ?, phone = ?, website = ?,
            facebook_link = ?, seeking_talent = ?, seeking_description = ?, image_link = ?
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(genre::to_db_string(&venue.genres)?)
    .bind(&venue.address)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.phone)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(&venue.image_link)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }
    Ok(())
}

/// Delete a venue and the shows booked there
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let shows = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls it back
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    debug!("Deleted venue {} and {} show(s)", id, shows.rows_affected());
    Ok(())
}
