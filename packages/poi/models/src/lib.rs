#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Point-of-interest record types.
//!
//! Two independently sourced datasets describe the same points of interest:
//! geometric [`Location`] records and descriptive [`Metadata`] records. Both
//! are keyed by a shared string id and joined into [`MergedRecord`]s.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Encoding of a raw input payload.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputFormat {
    /// A JSON array of objects.
    Json,
    /// Comma-separated rows with a leading header line.
    Csv,
}

impl InputFormat {
    /// Maps a file extension (without the leading dot) to a format.
    ///
    /// Matching is exact and case-sensitive: only `json` and `csv` are
    /// recognized.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Deserializes an explicit `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A geometric point for a single point of interest.
///
/// An empty `id` marks a malformed record; such records never participate
/// in a join.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Join key.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Latitude in decimal degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

impl Location {
    /// Creates a new location record.
    #[must_use]
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }
}

/// Descriptive attributes for a single point of interest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Join key.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Category label (e.g. `"park"`, `"cafe"`).
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub category: String,
    /// Average user rating. No range is enforced.
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Number of reviews. Negative values from malformed input are kept
    /// as-is.
    #[serde(deserialize_with = "null_as_default")]
    pub reviews: i64,
}

impl Metadata {
    /// Creates a new metadata record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
        reviews: i64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            rating,
            reviews,
        }
    }
}

/// Which side of the join a [`MergedRecord`] is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSide {
    /// No location record had this id.
    Location,
    /// No metadata record had this id.
    Metadata,
}

/// The outer-join result for one id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRecord {
    /// Join key shared by both sides.
    pub id: String,
    /// Location with this id, if any.
    pub location: Option<Location>,
    /// Metadata with this id, if any.
    pub metadata: Option<Metadata>,
}

impl MergedRecord {
    /// Creates a joined record from the (possibly absent) sides.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        location: Option<Location>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            metadata,
        }
    }

    /// Whether both a location and metadata are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.location.is_some() && self.metadata.is_some()
    }

    /// Returns both sides when the record is complete.
    #[must_use]
    pub const fn complete(&self) -> Option<(&Location, &Metadata)> {
        match (&self.location, &self.metadata) {
            (Some(location), Some(metadata)) => Some((location, metadata)),
            _ => None,
        }
    }

    /// Lists the sides this record lacks, location first.
    #[must_use]
    pub fn missing(&self) -> Vec<MissingSide> {
        let mut missing = Vec::with_capacity(2);
        if self.location.is_none() {
            missing.push(MissingSide::Location);
        }
        if self.metadata.is_none() {
            missing.push(MissingSide::Metadata);
        }
        missing
    }
}
