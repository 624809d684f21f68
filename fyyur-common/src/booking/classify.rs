//! Past/upcoming partition of shows

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::is_upcoming;
use crate::db::models::ShowListing;
use crate::time::format_start_time;

/// Whose page the shows are listed on
///
/// An artist page lists the venue of each show; a venue page lists the artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Artist,
    Venue,
}

/// The counterpart of a show as seen from one side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShowSummary {
    /// Seen from an artist page
    AtVenue {
        venue_id: i64,
        venue_name: String,
        venue_image_link: Option<String>,
        start_time: String,
    },
    /// Seen from a venue page
    ByArtist {
        artist_id: i64,
        artist_name: String,
        artist_image_link: Option<String>,
        start_time: String,
    },
}

impl ShowSummary {
    fn from_listing(show: &ShowListing, perspective: Perspective) -> Self {
        let start_time = format_start_time(&show.start_time);
        match perspective {
            Perspective::Artist => ShowSummary::AtVenue {
                venue_id: show.venue.id,
                venue_name: show.venue.name.clone(),
                venue_image_link: show.venue.image_link.clone(),
                start_time,
            },
            Perspective::Venue => ShowSummary::ByArtist {
                artist_id: show.artist.id,
                artist_name: show.artist.name.clone(),
                artist_image_link: show.artist.image_link.clone(),
                start_time,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassifiedShows {
    pub past: Vec<ShowSummary>,
    pub upcoming: Vec<ShowSummary>,
}

/// Split shows into past and upcoming relative to `now`
///
/// Stable: each bucket keeps the input order.
pub fn classify_shows(
    shows: &[ShowListing],
    now: DateTime<Utc>,
    perspective: Perspective,
) -> ClassifiedShows {
    let mut classified = ClassifiedShows::default();
    for show in shows {
        let summary = ShowSummary::from_listing(show, perspective);
        if is_upcoming(show.start_time, now) {
            classified.upcoming.push(summary);
        } else {
            classified.past.push(summary);
        }
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{at, listing};
    use super::*;

    fn start_times(summaries: &[ShowSummary]) -> Vec<String> {
        summaries
            .iter()
            .map(|s| match s {
                ShowSummary::AtVenue { start_time, .. } => start_time.clone(),
                ShowSummary::ByArtist { start_time, .. } => start_time.clone(),
            })
            .collect()
    }

    #[test]
    fn test_past_and_upcoming_split() {
        let shows = vec![listing(1, at(2025, 1, 1)), listing(2, at(2025, 6, 1))];
        let classified = classify_shows(&shows, at(2025, 3, 1), Perspective::Venue);

        assert_eq!(start_times(&classified.past), vec!["2025-01-01T00:00:00.000000Z"]);
        assert_eq!(start_times(&classified.upcoming), vec!["2025-06-01T00:00:00.000000Z"]);
    }

    #[test]
    fn test_show_starting_now_is_past() {
        let now = at(2025, 3, 1);
        let classified = classify_shows(&[listing(1, now)], now, Perspective::Artist);
        assert_eq!(classified.past.len(), 1);
        assert!(classified.upcoming.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let classified = classify_shows(&[], at(2025, 3, 1), Perspective::Artist);
        assert_eq!(classified, ClassifiedShows::default());
    }

    #[test]
    fn test_partition_is_total_and_stable() {
        let now = at(2025, 3, 1);
        let shows = vec![
            listing(1, at(2026, 1, 1)),
            listing(2, at(2020, 1, 1)),
            listing(3, at(2025, 4, 1)),
            listing(4, at(2024, 1, 1)),
            listing(5, at(2025, 3, 2)),
        ];
        let classified = classify_shows(&shows, now, Perspective::Venue);

        assert_eq!(classified.past.len() + classified.upcoming.len(), shows.len());
        assert_eq!(
            start_times(&classified.upcoming),
            vec![
                "2026-01-01T00:00:00.000000Z",
                "2025-04-01T00:00:00.000000Z",
                "2025-03-02T00:00:00.000000Z",
            ]
        );
        assert_eq!(
            start_times(&classified.past),
            vec!["2020-01-01T00:00:00.000000Z", "2024-01-01T00:00:00.000000Z"]
        );
    }

    #[test]
    fn test_artist_perspective_carries_venue() {
        let show = listing(7, at(2030, 1, 1));
        let classified = classify_shows(&[show.clone()], at(2025, 1, 1), Perspective::Artist);

        assert_eq!(
            classified.upcoming[0],
            ShowSummary::AtVenue {
                venue_id: show.venue.id,
                venue_name: show.venue.name.clone(),
                venue_image_link: show.venue.image_link.clone(),
                start_time: "2030-01-01T00:00:00.000000Z".to_string(),
            }
        );
    }

    #[test]
    fn test_venue_perspective_serializes_artist_fields() {
        let classified = classify_shows(&[listing(3, at(2019, 6, 15))], at(2025, 1, 1), Perspective::Venue);
        let json = serde_json::to_value(&classified.past[0]).unwrap();

        assert_eq!(json["artist_id"], 103);
        assert_eq!(json["artist_name"], "Artist 3");
        assert_eq!(json["artist_image_link"], "https://img.example/103.jpg");
        assert_eq!(json["start_time"], "2019-06-15T00:00:00.000000Z");
        assert!(json.get("venue_id").is_none());
    }
}
