//! Music genre vocabulary
//!
//! Venues and artists carry an ordered list of genres drawn from a closed
//! set. Lists are stored as a JSON array of display labels in a TEXT column.
//! Older exports used the Postgres array literal form (`{jazz,r_b}`) with
//! snake-case keys; both forms are accepted when reading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Closed set of music genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Jazz", alias = "jazz")]
    Jazz,
    #[serde(rename = "Classical", alias = "classical")]
    Classical,
    #[serde(rename = "Reggae", alias = "reggae")]
    Reggae,
    #[serde(rename = "Swing", alias = "swing")]
    Swing,
    #[serde(rename = "Folk", alias = "folk")]
    Folk,
    #[serde(rename = "R&B", alias = "r_b")]
    RnB,
    #[serde(rename = "Hip-Hop", alias = "hip_hop")]
    HipHop,
    #[serde(rename = "Rock n Roll", alias = "rock_n_roll")]
    RockNRoll,
}

impl Genre {
    /// Parse a genre from its display label or its snake-case key
    ///
    /// Matching is exact; `"Jazz"` and `"jazz"` are accepted, `"JAZZ"` is not.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::all_variants()
            .iter()
            .copied()
            .find(|g| g.display_name() == s || g.key() == s)
    }

    /// Snake-case key used by the legacy enum column
    pub fn key(&self) -> &'static str {
        match self {
            Genre::Jazz => "jazz",
            Genre::Classical => "classical",
            Genre::Reggae => "reggae",
            Genre::Swing => "swing",
            Genre::Folk => "folk",
            Genre::RnB => "r_b",
            Genre::HipHop => "hip_hop",
            Genre::RockNRoll => "rock_n_roll",
        }
    }

    /// Human-readable label, also the serialized form
    pub fn display_name(&self) -> &'static str {
        match self {
            Genre::Jazz => "Jazz",
            Genre::Classical => "Classical",
            Genre::Reggae => "Reggae",
            Genre::Swing => "Swing",
            Genre::Folk => "Folk",
            Genre::RnB => "R&B",
            Genre::HipHop => "Hip-Hop",
            Genre::RockNRoll => "Rock n Roll",
        }
    }

    /// All genres, in the order offered by entry forms
    pub fn all_variants() -> &'static [Genre] {
        &[
            Genre::Jazz,
            Genre::Classical,
            Genre::Reggae,
            Genre::Swing,
            Genre::Folk,
            Genre::RnB,
            Genre::HipHop,
            Genre::RockNRoll,
        ]
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Serialize a genre list for storage
pub fn to_db_string(genres: &[Genre]) -> Result<String> {
    Ok(serde_json::to_string(genres)?)
}

/// Parse a stored genre list
///
/// Accepts a JSON array of labels or keys, or a Postgres array literal.
/// NULL/blank columns yield an empty list.
pub fn parse_db_string(raw: Option<&str>) -> Result<Vec<Genre>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(Vec::new()),
        Some(raw) => raw,
    };

    if raw.starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }

    let inner = raw
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| Error::InvalidInput(format!("Unrecognized genre list: {}", raw)))?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|item| {
            let item = item.trim().trim_matches('"');
            Genre::from_str(item)
                .ok_or_else(|| Error::InvalidInput(format!("Unknown genre: {}", item)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_key_parse_to_same_variant() {
        for genre in Genre::all_variants() {
            assert_eq!(Genre::from_str(genre.display_name()), Some(*genre));
            assert_eq!(Genre::from_str(genre.key()), Some(*genre));
        }
    }

    #[test]
    fn test_unknown_genre_rejected() {
        assert_eq!(Genre::from_str("Polka"), None);
        assert_eq!(Genre::from_str("JAZZ"), None);
        assert!(serde_json::from_str::<Genre>("\"Polka\"").is_err());
    }

    #[test]
    fn test_serializes_as_display_label() {
        let json = serde_json::to_string(&vec![Genre::RnB, Genre::RockNRoll]).unwrap();
        assert_eq!(json, r#"["R&B","Rock n Roll"]"#);
    }

    #[test]
    fn test_deserialize_accepts_keys() {
        let genres: Vec<Genre> = serde_json::from_str(r#"["hip_hop","Jazz"]"#).unwrap();
        assert_eq!(genres, vec![Genre::HipHop, Genre::Jazz]);
    }

    #[test]
    fn test_db_string_keeps_order_and_duplicates() {
        let genres = vec![Genre::Swing, Genre::Jazz, Genre::Swing];
        let stored = to_db_string(&genres).unwrap();
        assert_eq!(parse_db_string(Some(&stored)).unwrap(), genres);
    }

    #[test]
    fn test_parse_postgres_literal() {
        assert_eq!(
            parse_db_string(Some("{jazz,r_b,rock_n_roll}")).unwrap(),
            vec![Genre::Jazz, Genre::RnB, Genre::RockNRoll]
        );
        assert!(parse_db_string(Some("{}")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_null_and_blank() {
        assert!(parse_db_string(None).unwrap().is_empty());
        assert!(parse_db_string(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_db_string(Some("jazz")).is_err());
        assert!(parse_db_string(Some("{jazz,polka}")).is_err());
    }
}
