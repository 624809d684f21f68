//! Page records for a single venue, a single artist and the show list

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classify::{classify_shows, Perspective, ShowSummary};
use crate::db::models::{ArtistWithShows, ShowListing, VenueWithShows};
use crate::genre::Genre;
use crate::time::format_start_time;

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<Genre>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<Genre>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One line of the all-shows listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

pub fn venue_detail(entry: VenueWithShows, now: DateTime<Utc>) -> VenueDetail {
    let classified = classify_shows(&entry.shows, now, Perspective::Venue);
    let venue = entry.venue;

    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: classified.past.len(),
        upcoming_shows_count: classified.upcoming.len(),
        past_shows: classified.past,
        upcoming_shows: classified.upcoming,
    }
}

pub fn artist_detail(entry: ArtistWithShows, now: DateTime<Utc>) -> ArtistDetail {
    let classified = classify_shows(&entry.shows, now, Perspective::Artist);
    let artist = entry.artist;

    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: classified.past.len(),
        upcoming_shows_count: classified.upcoming.len(),
        past_shows: classified.past,
        upcoming_shows: classified.upcoming,
    }
}

pub fn list_shows(shows: &[ShowListing]) -> Vec<ShowRow> {
    shows
        .iter()
        .map(|show| ShowRow {
            venue_id: show.venue.id,
            venue_name: show.venue.name.clone(),
            artist_id: show.artist.id,
            artist_name: show.artist.name.clone(),
            artist_image_link: show.artist.image_link.clone(),
            start_time: format_start_time(&show.start_time),
        })
        .collect()
}
