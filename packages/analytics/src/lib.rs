#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Merge-and-analyze pipeline for point-of-interest data.
//!
//! [`merge()`] performs a full outer join of location and metadata records
//! on their id. [`analyze()`] partitions the joined records into complete
//! and incomplete ones and computes per-type statistics over the complete
//! ones.

pub mod analyze;
pub mod merge;

pub use analyze::analyze;
pub use merge::merge;
pub use poi_map_analytics_models::AnalysisReport;
