//! Booking logic shared by every route
//!
//! Pure functions that shape entity-store records into response records.
//! All of them take the reference timestamp as a parameter: a request
//! captures `now` once and hands the same value to every call, so a show
//! can never be upcoming in one part of a response and past in another.

use chrono::{DateTime, Utc};

use crate::db::models::{Show, ShowListing};

mod aggregate;
mod classify;
mod detail;
mod search;

pub use aggregate::{group_venues_by_area, Area, VenueSummary};
pub use classify::{classify_shows, ClassifiedShows, Perspective, ShowSummary};
pub use detail::{artist_detail, list_shows, venue_detail, ArtistDetail, ShowRow, VenueDetail};
pub use search::{name_matches, search_results, EntitySummary, Named, SearchResults};

/// Anything with a start time
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for Show {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Upcoming iff strictly after `now`; a show starting exactly at `now` is past.
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

/// Count shows strictly after `now`
pub fn count_upcoming<S: Scheduled>(shows: &[S], now: DateTime<Utc>) -> usize {
    shows
        .iter()
        .filter(|show| is_upcoming(show.start_time(), now))
        .count()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::db::models::{Party, ShowListing, Venue};

    pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    pub fn party(id: i64, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            image_link: Some(format!("https://img.example/{}.jpg", id)),
        }
    }

    pub fn listing(id: i64, start_time: DateTime<Utc>) -> ShowListing {
        ShowListing {
            id,
            start_time,
            artist: party(100 + id, &format!("Artist {}", id)),
            venue: party(200 + id, &format!("Venue {}", id)),
        }
    }

    pub fn venue(id: i64, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            genres: Vec::new(),
            address: None,
            city: city.to_string(),
            state: state.to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
            image_link: None,
        }
    }
}
