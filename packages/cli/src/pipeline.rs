//! Parse -> merge -> analyze driver.
//!
//! Formats for both inputs are resolved before either file is read, so an
//! unsupported encoding stops the run with no partial output.

use std::path::{Path, PathBuf};

use poi_map_analytics::{AnalysisReport, analyze, merge};
use poi_map_poi_models::InputFormat;
use poi_map_source::{SourceError, parse_locations, parse_metadata, resolve_format};

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An input's encoding could not be determined.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// One input dataset on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    /// File to read.
    pub path: PathBuf,
    /// Explicit encoding. When `None`, the file extension decides.
    pub format: Option<InputFormat>,
}

impl InputSource {
    /// Creates an input whose encoding is inferred from its extension.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    /// Forces a specific encoding regardless of extension.
    #[must_use]
    pub const fn with_format(mut self, format: Option<InputFormat>) -> Self {
        self.format = format;
        self
    }
}

/// Reads both inputs from disk and runs the full pipeline.
///
/// # Errors
///
/// Returns [`PipelineError::Source`] if either input has an unsupported
/// encoding, or [`PipelineError::Read`] if a file cannot be read.
pub fn run(
    locations: &InputSource,
    metadata: &InputSource,
) -> Result<AnalysisReport, PipelineError> {
    let locations_format = resolve_format(&locations.path, locations.format)?;
    let metadata_format = resolve_format(&metadata.path, metadata.format)?;

    log::info!(
        "Using locations file: {} ({locations_format})",
        locations.path.display()
    );
    log::info!(
        "Using metadata file: {} ({metadata_format})",
        metadata.path.display()
    );

    let locations_text = read(&locations.path)?;
    let metadata_text = read(&metadata.path)?;

    Ok(run_texts(
        locations_format,
        &locations_text,
        metadata_format,
        &metadata_text,
    ))
}

/// Runs the pipeline over already-loaded payloads.
#[must_use]
pub fn run_texts(
    locations_format: InputFormat,
    locations_text: &str,
    metadata_format: InputFormat,
    metadata_text: &str,
) -> AnalysisReport {
    let locations = parse_locations(locations_format, locations_text);
    let metadata = parse_metadata(metadata_format, metadata_text);

    log::info!("Loaded {} locations", locations.len());
    log::info!("Loaded {} metadata entries", metadata.len());

    analyze(&merge(&locations, &metadata))
}

fn read(path: &Path) -> Result<String, PipelineError> {
    std::fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}
