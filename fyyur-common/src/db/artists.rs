//! Artist queries and writes

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::models::{Artist, ArtistWithShows, NewArtist, ShowListing};
use super::shows::{all_show_listings, listings_for_artist};
use crate::booking::name_matches;
use crate::genre;
use crate::{Error, Result};

const ARTIST_COLUMNS: &str = "id, name, genres, city, state, phone, website, \
                              facebook_link, seeking_venue, seeking_description, image_link";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: Option<String> = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: genre::parse_db_string(genres.as_deref())?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
        image_link: row.try_get("image_link")?,
    })
}

/// Every artist, in id order
pub async fn all_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {} FROM artists ORDER BY id ASC", ARTIST_COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(artist_from_row).collect()
}

/// Every artist with their shows attached
pub async fn all_artists_with_shows(pool: &SqlitePool) -> Result<Vec<ArtistWithShows>> {
    let artists = all_artists(pool).await?;

    let mut by_artist: HashMap<i64, Vec<ShowListing>> = HashMap::new();
    for show in all_show_listings(pool).await? {
        by_artist.entry(show.artist.id).or_default().push(show);
    }

    Ok(artists
        .into_iter()
        .map(|artist| {
            let shows = by_artist.remove(&artist.id).unwrap_or_default();
            ArtistWithShows { artist, shows }
        })
        .collect())
}

/// Artist record without shows
pub async fn find_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// Artist with their shows, or `None` for an unknown id
pub async fn artist_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ArtistWithShows>> {
    let Some(artist) = find_artist(pool, id).await? else {
        return Ok(None);
    };
    let shows = listings_for_artist(pool, id).await?;

    Ok(Some(ArtistWithShows { artist, shows }))
}

/// Artists whose name contains `term`, ignoring case, in id order
pub async fn search_artists_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<ArtistWithShows>> {
    let matches: Vec<ArtistWithShows> = all_artists_with_shows(pool)
        .await?
        .into_iter()
        .filter(|entry| name_matches(&entry.artist.name, term))
        .collect();

    debug!("Artist search {:?} matched {}", term, matches.len());
    Ok(matches)
}

/// Insert an artist; returns the new id
pub async fn insert_artist(pool: &SqlitePool, artist: &NewArtist) -> Result<i64> {
    artist.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO artists (name, genres, city, state, phone, website,
                             facebook_link, seeking_venue, seeking_description, image_link)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(genre::to_db_string(&artist.genres)?)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(&artist.image_link)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Replace every editable field of an artist
pub async fn update_artist(pool: &SqlitePool, id: i64, artist: &NewArtist) -> Result<()> {
    artist.validate()?;

    let result = sqlx::query(
        r#"
        UPDATE artists
        SET name = ?, genres = ?, city = ?, state = ?, phone = ?, website = ?,
            facebook_link = ?, seeking_venue = ?, seeking_description = ?, image_link = ?
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(genre::to_db_string(&artist.genres)?)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(&artist.image_link)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }
    Ok(())
}
