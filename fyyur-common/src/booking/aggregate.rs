//! Venue grouping by city and state

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::count_upcoming;
use crate::db::models::VenueWithShows;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venues by exact (city, state)
///
/// Keys are compared verbatim, so "Boston" and "boston" are different areas.
/// Areas come out in the order their key is first seen, and venues inside an
/// area keep input order.
pub fn group_venues_by_area(venues: &[VenueWithShows], now: DateTime<Utc>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for entry in venues {
        let venue = &entry.venue;
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: count_upcoming(&entry.shows, now),
        };

        let key = (venue.city.as_str(), venue.state.as_str());
        match index.get(&key) {
            Some(&slot) => areas[slot].venues.push(summary),
            None => {
                index.insert(key, areas.len());
                areas.push(Area {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![summary],
                });
            }
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{at, listing, venue};
    use super::*;

    fn entry(id: i64, name: &str, city: &str, state: &str) -> VenueWithShows {
        VenueWithShows {
            venue: venue(id, name, city, state),
            shows: Vec::new(),
        }
    }

    fn ids(area: &Area) -> Vec<i64> {
        area.venues.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let venues = vec![
            entry(1, "A", "Boston", "MA"),
            entry(2, "B", "Boston", "MA"),
            entry(3, "C", "NY", "NY"),
        ];
        let areas = group_venues_by_area(&venues, at(2025, 3, 1));

        assert_eq!(areas.len(), 2);
        assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("Boston", "MA"));
        assert_eq!(ids(&areas[0]), vec![1, 2]);
        assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("NY", "NY"));
        assert_eq!(ids(&areas[1]), vec![3]);
    }

    #[test]
    fn test_key_order_is_not_alphabetical() {
        let venues = vec![
            entry(1, "Z", "San Francisco", "CA"),
            entry(2, "Y", "New York", "NY"),
            entry(3, "X", "San Francisco", "CA"),
        ];
        let areas = group_venues_by_area(&venues, at(2025, 3, 1));

        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(ids(&areas[0]), vec![1, 3]);
        assert_eq!(areas[1].city, "New York");
    }

    #[test]
    fn test_keys_are_case_and_space_sensitive() {
        let venues = vec![
            entry(1, "A", "Boston", "MA"),
            entry(2, "B", "boston", "MA"),
            entry(3, "C", "Boston ", "MA"),
            entry(4, "D", "Boston", "ma"),
        ];
        let areas = group_venues_by_area(&venues, at(2025, 3, 1));
        assert_eq!(areas.len(), 4);
    }

    #[test]
    fn test_every_venue_lands_in_exactly_one_area() {
        let venues = vec![
            entry(1, "A", "Austin", "TX"),
            entry(2, "B", "Denver", "CO"),
            entry(3, "C", "Austin", "TX"),
            entry(4, "D", "Denver", "CO"),
            entry(5, "E", "Boise", "ID"),
        ];
        let areas = group_venues_by_area(&venues, at(2025, 3, 1));

        let mut seen: Vec<i64> = areas.iter().flat_map(ids).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_upcoming_counts_use_reference_time() {
        let now = at(2025, 3, 1);
        let venues = vec![VenueWithShows {
            venue: venue(1, "The Musical Hop", "San Francisco", "CA"),
            shows: vec![
                listing(1, at(2019, 5, 21)),
                listing(2, now),
                listing(3, at(2035, 4, 1)),
                listing(4, at(2035, 4, 8)),
            ],
        }];
        let areas = group_venues_by_area(&venues, now);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_venues_by_area(&[], at(2025, 3, 1)).is_empty());
    }
}
