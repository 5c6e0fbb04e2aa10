#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record parsers for point-of-interest datasets.
//!
//! Each dataset arrives as a raw text blob in one of the [`InputFormat`]
//! encodings. Parsing never fails as a whole: malformed payloads and rows
//! are reported through the `log` facade and dropped, so callers always get
//! back a (possibly empty) collection. The only fatal condition is an
//! unrecognized encoding, which [`resolve_format`] reports before any
//! parsing happens.

pub mod csv_records;
pub mod json_records;

use std::path::{Path, PathBuf};

use poi_map_poi_models::{InputFormat, Location, Metadata};

/// Errors that can occur while selecting a parser.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The input's encoding could not be determined.
    #[error("Unsupported file format for: {}", path.display())]
    UnsupportedFormat {
        /// Path whose extension was not recognized.
        path: PathBuf,
    },
}

/// Determines the encoding for an input file.
///
/// An explicit format always wins. Otherwise the file extension decides.
///
/// # Errors
///
/// Returns [`SourceError::UnsupportedFormat`] if no explicit format was
/// given and the extension is neither `json` nor `csv`.
pub fn resolve_format(
    path: &Path,
    explicit: Option<InputFormat>,
) -> Result<InputFormat, SourceError> {
    if let Some(format) = explicit {
        return Ok(format);
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(InputFormat::from_extension)
        .ok_or_else(|| SourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
}

/// Parses location records from `text` using the given encoding.
#[must_use]
pub fn parse_locations(format: InputFormat, text: &str) -> Vec<Location> {
    match format {
        InputFormat::Json => json_records::parse_locations(text),
        InputFormat::Csv => csv_records::parse_locations(text),
    }
}

/// Parses metadata records from `text` using the given encoding.
#[must_use]
pub fn parse_metadata(format: InputFormat, text: &str) -> Vec<Metadata> {
    match format {
        InputFormat::Json => json_records::parse_metadata(text),
        InputFormat::Csv => csv_records::parse_metadata(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_format_from_extension() {
        assert_eq!(
            resolve_format(Path::new("data/locations.json"), None).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            resolve_format(Path::new("metadata.csv"), None).unwrap(),
            InputFormat::Csv
        );
    }

    #[test]
    fn explicit_format_overrides_extension() {
        assert_eq!(
            resolve_format(Path::new("export.txt"), Some(InputFormat::Csv)).unwrap(),
            InputFormat::Csv
        );
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = resolve_format(Path::new("locations.xml"), None).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedFormat { .. }));
        assert_eq!(err.to_string(), "Unsupported file format for: locations.xml");
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(resolve_format(Path::new("locations"), None).is_err());
    }

    #[test]
    fn dispatches_on_format() {
        let json = r#"[{"id": "A", "latitude": 1.0, "longitude": 2.0}]"#;
        let csv = "id,latitude,longitude\nA,1.0,2.0\n";
        assert_eq!(
            parse_locations(InputFormat::Json, json),
            parse_locations(InputFormat::Csv, csv)
        );

        let json = r#"[{"id": "A", "type": "park", "rating": 4.0, "reviews": 3}]"#;
        let csv = "id,type,rating,reviews\nA,park,4.0,3\n";
        assert_eq!(
            parse_metadata(InputFormat::Json, json),
            parse_metadata(InputFormat::Csv, csv)
        );
    }
}
