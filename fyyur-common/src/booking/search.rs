//! Name search results

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::count_upcoming;
use crate::db::models::{ArtistWithShows, ShowListing, VenueWithShows};

/// An entity with a display name and booked shows
pub trait Named {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn shows(&self) -> &[ShowListing];
}

impl Named for VenueWithShows {
    fn id(&self) -> i64 {
        self.venue.id
    }
    fn name(&self) -> &str {
        &self.venue.name
    }
    fn shows(&self) -> &[ShowListing] {
        &self.shows
    }
}

impl Named for ArtistWithShows {
    fn id(&self) -> i64 {
        self.artist.id
    }
    fn name(&self) -> &str {
        &self.artist.name
    }
    fn shows(&self) -> &[ShowListing] {
        &self.shows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

/// Case-insensitive substring match; an empty term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Shape already-matched entities into a result set, keeping their order
pub fn search_results<E: Named>(matches: &[E], now: DateTime<Utc>) -> SearchResults {
    let data: Vec<EntitySummary> = matches
        .iter()
        .map(|entity| EntitySummary {
            id: entity.id(),
            name: entity.name().to_string(),
            num_upcoming_shows: count_upcoming(entity.shows(), now),
        })
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{at, listing, venue};
    use super::*;

    const ARTISTS: [&str; 3] = ["Guns N Petals", "Matt Quevado", "The Wild Sax Band"];

    fn matching(term: &str) -> Vec<&'static str> {
        ARTISTS.iter().copied().filter(|n| name_matches(n, term)).collect()
    }

    #[test]
    fn test_single_letter_matches_all() {
        assert_eq!(matching("a"), ARTISTS.to_vec());
        assert_eq!(matching("A"), ARTISTS.to_vec());
    }

    #[test]
    fn test_band_matches_one() {
        assert_eq!(matching("band"), vec!["The Wild Sax Band"]);
        assert_eq!(matching("BAND"), vec!["The Wild Sax Band"]);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(matching(""), ARTISTS.to_vec());
    }

    #[test]
    fn test_no_tokenization() {
        assert!(matching("Sax Band").len() == 1);
        assert!(matching("Band Sax").is_empty());
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(name_matches("Café Über", "über"));
    }

    #[test]
    fn test_results_carry_counts_in_order() {
        let now = at(2025, 3, 1);
        let venues = vec![
            VenueWithShows {
                venue: venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
                shows: vec![listing(1, at(2035, 1, 1)), listing(2, at(2019, 1, 1))],
            },
            VenueWithShows {
                venue: venue(1, "The Musical Hop", "San Francisco", "CA"),
                shows: Vec::new(),
            },
        ];
        let results = search_results(&venues, now);

        assert_eq!(results.count, 2);
        assert_eq!(results.data[0].id, 3);
        assert_eq!(results.data[0].num_upcoming_shows, 1);
        assert_eq!(results.data[1].id, 1);
        assert_eq!(results.data[1].num_upcoming_shows, 0);
    }
}
