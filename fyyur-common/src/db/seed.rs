//! Demo listings for a fresh database

use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use tracing::info;

use super::artists::insert_artist;
use super::models::{NewArtist, NewShow, NewVenue};
use super::shows::insert_show;
use super::venues::insert_venue;
use crate::genre::Genre;
use crate::{Error, Result};

/// Insert the demo venues, artists and shows if no venue or artist exists yet
///
/// Returns `true` when data was inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM venues) + (SELECT COUNT(*) FROM artists)",
    )
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        info!("Database already has {} venue/artist record(s); skipping demo data", existing);
        return Ok(false);
    }

    let musical_hop = insert_venue(pool, &NewVenue {
        name: "The Musical Hop".to_string(),
        genres: vec![Genre::Jazz, Genre::Reggae, Genre::Swing, Genre::Classical, Genre::Folk],
        address: Some("1015 Folsom Street".to_string()),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("123-123-1234".to_string()),
        website: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        seeking_talent: true,
        seeking_description: Some(
            "We are on the lookout for a local artist to play every two weeks. Please call us."
                .to_string(),
        ),
        image_link: Some(
            "https://images.unsplash.com/photo-1543900694-133f37abaaa5?auto=format&fit=crop&w=400&q=60"
                .to_string(),
        ),
    })
    .await?;

    insert_venue(pool, &NewVenue {
        name: "The Dueling Pianos Bar".to_string(),
        genres: vec![Genre::Classical, Genre::RnB, Genre::HipHop],
        address: Some("335 Delancey Street".to_string()),
        city: "New York".to_string(),
        state: "NY".to_string(),
        phone: Some("914-003-1132".to_string()),
        website: Some("https://www.theduelingpianos.com".to_string()),
        facebook_link: Some("https://www.facebook.com/theduelingpianos".to_string()),
        ..Default::default()
    })
    .await?;

    let park_square = insert_venue(pool, &NewVenue {
        name: "Park Square Live Music & Coffee".to_string(),
        genres: vec![Genre::RockNRoll, Genre::Jazz, Genre::Classical, Genre::Folk],
        address: Some("34 Whiskey Moore Ave".to_string()),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("415-000-1234".to_string()),
        website: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
        facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string()),
        ..Default::default()
    })
    .await?;

    let guns_n_petals = insert_artist(pool, &NewArtist {
        name: "Guns N Petals".to_string(),
        genres: vec![Genre::RockNRoll],
        city: Some("San Francisco".to_string()),
        state: Some("CA".to_string()),
        phone: Some("326-123-5000".to_string()),
        website: Some("https://www.gunsnpetalsband.com".to_string()),
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        seeking_venue: true,
        seeking_description: Some(
            "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
        ),
        image_link: Some(
            "https://images.unsplash.com/photo-1549213783-8284d0336c4f?auto=format&fit=crop&w=300&q=80"
                .to_string(),
        ),
    })
    .await?;

    let matt_quevado = insert_artist(pool, &NewArtist {
        name: "Matt Quevado".to_string(),
        genres: vec![Genre::Jazz],
        city: Some("New York".to_string()),
        state: Some("NY".to_string()),
        phone: Some("300-400-5000".to_string()),
        facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
        ..Default::default()
    })
    .await?;

    let wild_sax_band = insert_artist(pool, &NewArtist {
        name: "The Wild Sax Band".to_string(),
        genres: vec![Genre::Jazz, Genre::Classical],
        city: Some("San Francisco".to_string()),
        state: Some("CA".to_string()),
        phone: Some("432-325-5432".to_string()),
        ..Default::default()
    })
    .await?;

    let bookings = [
        (guns_n_petals, musical_hop, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0)),
        (matt_quevado, park_square, Utc.with_ymd_and_hms(2019, 6, 15, 23, 0, 0)),
        (wild_sax_band, park_square, Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0)),
        (wild_sax_band, park_square, Utc.with_ymd_and_hms(2035, 4, 8, 20, 0, 0)),
        (wild_sax_band, park_square, Utc.with_ymd_and_hms(2035, 4, 15, 20, 0, 0)),
    ];

    let show_count = bookings.len();
    for (artist_id, venue_id, start_time) in bookings {
        let start_time = start_time
            .single()
            .ok_or_else(|| Error::InvalidInput("ambiguous demo start time".to_string()))?;
        insert_show(pool, &NewShow { artist_id, venue_id, start_time }).await?;
    }

    info!("Inserted demo data: 3 venues, 3 artists, {} shows", show_count);
    Ok(true)
}
