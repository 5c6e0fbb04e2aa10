#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for merging point-of-interest datasets.
//!
//! Joins a locations file and a metadata file by id and prints per-type
//! counts, average ratings, the most reviewed place, and the records that
//! are missing either side.

use std::path::PathBuf;

use clap::Parser;
use poi_map_cli::config::{FileConfig, InputKind, resolve_path_from_env};
use poi_map_cli::pipeline::{self, InputSource};
use poi_map_cli::report::{self, OutputFormat};
use poi_map_poi_models::InputFormat;

#[derive(Parser)]
#[command(name = "poi_map", about = "Point-of-interest merge and analysis tool")]
struct Cli {
    /// Locations file (`.json` or `.csv`)
    #[arg(long)]
    locations: Option<PathBuf>,
    /// Metadata file (`.json` or `.csv`)
    #[arg(long)]
    metadata: Option<PathBuf>,
    /// Encoding of the locations file, overriding its extension (`json` or `csv`)
    #[arg(long)]
    locations_format: Option<InputFormat>,
    /// Encoding of the metadata file, overriding its extension (`json` or `csv`)
    #[arg(long)]
    metadata_format: Option<InputFormat>,
    /// TOML file providing `locations_file` and `metadata_file`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report format (`text` or `json`)
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let locations = InputSource::new(resolve_path_from_env(
        InputKind::Locations,
        cli.locations,
        file_config.locations_file,
    )?)
    .with_format(cli.locations_format);
    let metadata = InputSource::new(resolve_path_from_env(
        InputKind::Metadata,
        cli.metadata,
        file_config.metadata_file,
    )?)
    .with_format(cli.metadata_format);

    let analysis = pipeline::run(&locations, &metadata)?;

    print!("{}", report::render(&analysis, cli.output)?);

    Ok(())
}
