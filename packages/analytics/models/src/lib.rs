#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analysis result types for joined point-of-interest data.
//!
//! An [`AnalysisReport`] is the hand-off between the analyzer and whatever
//! renders it. Every figure is a plain public field so callers can inspect
//! them directly instead of parsing rendered text.

use std::collections::BTreeMap;

use poi_map_poi_models::MergedRecord;
use serde::{Deserialize, Serialize};

/// Aggregate statistics and the data-quality report for one run.
///
/// Only complete records (both location and metadata present) contribute to
/// `type_count`, `avg_rating`, and `most_reviewed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Number of complete records per type.
    pub type_count: BTreeMap<String, u64>,
    /// Unrounded mean rating of complete records per type.
    pub avg_rating: BTreeMap<String, f64>,
    /// The complete record with the most reviews. Ties go to the smallest
    /// id. `None` when there are no complete records.
    pub most_reviewed: Option<MergedRecord>,
    /// Records missing a location, metadata, or both, in input order.
    pub incomplete: Vec<MergedRecord>,
}

impl AnalysisReport {
    /// Total number of complete records across all types.
    #[must_use]
    pub fn complete_count(&self) -> u64 {
        self.type_count.values().sum()
    }

    /// Number of records excluded from aggregation.
    #[must_use]
    pub const fn incomplete_count(&self) -> usize {
        self.incomplete.len()
    }
}
