//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::genre::Genre;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

/// Identity, name and image of one side of a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub image_link: Option<String>,
}

/// A show joined with its artist and venue
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub artist: Party,
    pub venue: Party,
}

/// A venue together with every show booked there, in store order
#[derive(Debug, Clone)]
pub struct VenueWithShows {
    pub venue: Venue,
    pub shows: Vec<ShowListing>,
}

/// An artist together with every show they play, in store order
#[derive(Debug, Clone)]
pub struct ArtistWithShows {
    pub artist: Artist,
    pub shows: Vec<ShowListing>,
}

/// Venue fields accepted by create and edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVenue {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl NewVenue {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("city", &self.city)?;
        require_text("state", &self.state)
    }
}

/// Artist fields accepted by create and edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewArtist {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl NewArtist {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be blank", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_venue_fields_rejected() {
        let venue = NewVenue {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: " ".to_string(),
            ..Default::default()
        };
        let err = venue.validate().unwrap_err();
        assert!(err.to_string().contains("state"));
    }

    #[test]
    fn test_artist_requires_name_only() {
        let artist = NewArtist {
            name: "Matt Quevado".to_string(),
            ..Default::default()
        };
        assert!(artist.validate().is_ok());

        let blank = NewArtist::default();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_new_venue_rejects_unknown_genre() {
        let body = r#"{"name":"X","city":"Y","state":"Z","genres":["Polka"]}"#;
        assert!(serde_json::from_str::<NewVenue>(body).is_err());
    }
}
