#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library side of the `poi_map` CLI: configuration, the file-based
//! pipeline driver, and report rendering.

pub mod config;
pub mod pipeline;
pub mod report;
