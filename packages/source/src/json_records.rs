//! JSON array decoding.
//!
//! A payload is expected to be a top-level array of objects. An empty
//! payload, a `null` payload, or one that fails to decode all yield an empty
//! collection.

use poi_map_poi_models::{Location, Metadata};
use serde::de::DeserializeOwned;

/// Decodes a JSON array of location objects.
#[must_use]
pub fn parse_locations(text: &str) -> Vec<Location> {
    decode(text, "locations")
}

/// Decodes a JSON array of metadata objects.
#[must_use]
pub fn parse_metadata(text: &str) -> Vec<Metadata> {
    decode(text, "metadata")
}

fn decode<T: DeserializeOwned>(text: &str, kind: &str) -> Vec<T> {
    if text.trim().is_empty() {
        log::warn!("Empty {kind} JSON payload; no records loaded");
        return Vec::new();
    }

    match serde_json::from_str::<Option<Vec<T>>>(text) {
        Ok(Some(records)) => {
            log::debug!("Decoded {} {kind} records from JSON", records.len());
            records
        }
        Ok(None) => {
            log::warn!("{kind} JSON payload is null; no records loaded");
            Vec::new()
        }
        Err(e) => {
            log::warn!("Error parsing {kind} JSON: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_locations() {
        let text = r#"[
            {"id": "A", "latitude": 52.52, "longitude": 13.405},
            {"id": "B", "latitude": -33.86, "longitude": 151.21}
        ]"#;
        let locations = parse_locations(text);
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0], Location::new("A", 52.52, 13.405));
        assert_eq!(locations[1].id, "B");
    }

    #[test]
    fn decodes_metadata() {
        let text = r#"[{"id": "A", "type": "museum", "rating": 4.7, "reviews": 1200}]"#;
        assert_eq!(
            parse_metadata(text),
            vec![Metadata::new("A", "museum", 4.7, 1200)]
        );
    }

    #[test]
    fn keeps_negative_review_counts() {
        let text = r#"[{"id": "A", "type": "cafe", "rating": 2.0, "reviews": -4}]"#;
        assert_eq!(parse_metadata(text)[0].reviews, -4);
    }

    #[test]
    fn empty_array_yields_nothing() {
        assert!(parse_locations("[]").is_empty());
    }

    #[test]
    fn blank_payload_yields_nothing() {
        assert!(parse_locations("").is_empty());
        assert!(parse_metadata("  \n ").is_empty());
    }

    #[test]
    fn null_payload_yields_nothing() {
        assert!(parse_locations("null").is_empty());
    }

    #[test]
    fn malformed_payload_yields_nothing() {
        assert!(parse_locations(r#"[{"id": "A", "latitude": "#).is_empty());
        assert!(parse_metadata(r#"{"id": "A"}"#).is_empty());
    }

    #[test]
    fn missing_id_is_kept_as_empty() {
        let locations = parse_locations(r#"[{"latitude": 1.0, "longitude": 2.0}]"#);
        assert_eq!(locations.len(), 1);
        assert!(locations[0].id.is_empty());
    }
}
