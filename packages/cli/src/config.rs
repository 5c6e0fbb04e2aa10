//! Input path configuration.
//!
//! Paths come from three places, in order of precedence: command-line
//! flags, an optional TOML config file, and environment variables.
//!
//! ```toml
//! locations_file = "data/locations.json"
//! metadata_file = "data/metadata.csv"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the locations file.
pub const LOCATIONS_FILE_ENV: &str = "POI_MAP_LOCATIONS_FILE";

/// Environment variable naming the metadata file.
pub const METADATA_FILE_ENV: &str = "POI_MAP_METADATA_FILE";

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`FileConfig`].
    #[error("Invalid config file {}: {source}", path.display())]
    Toml {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// No source supplied a required path.
    #[error("No {name} file configured (use --{flag}, `{key}` in the config file, or {env})")]
    MissingPath {
        /// Human-readable input name.
        name: &'static str,
        /// Command-line flag name.
        flag: &'static str,
        /// Config file key.
        key: &'static str,
        /// Environment variable name.
        env: &'static str,
    },
}

/// Contents of the optional TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the locations dataset.
    pub locations_file: Option<PathBuf>,
    /// Path to the metadata dataset.
    pub metadata_file: Option<PathBuf>,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config file {}", path.display());

        Self::parse(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses config file contents.
    ///
    /// # Errors
    ///
    /// Returns a TOML error if the text is malformed or has unknown keys.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Which dataset a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Geometric location records.
    Locations,
    /// Descriptive metadata records.
    Metadata,
}

impl InputKind {
    const fn missing(self) -> ConfigError {
        match self {
            Self::Locations => ConfigError::MissingPath {
                name: "locations",
                flag: "locations",
                key: "locations_file",
                env: LOCATIONS_FILE_ENV,
            },
            Self::Metadata => ConfigError::MissingPath {
                name: "metadata",
                flag: "metadata",
                key: "metadata_file",
                env: METADATA_FILE_ENV,
            },
        }
    }

    /// Environment variable consulted for this input.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Locations => LOCATIONS_FILE_ENV,
            Self::Metadata => METADATA_FILE_ENV,
        }
    }
}

/// Picks the first configured path: flag, then config file, then `env`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingPath`] if none of them is set.
pub fn resolve_path(
    kind: InputKind,
    flag: Option<PathBuf>,
    file: Option<PathBuf>,
    env: Option<String>,
) -> Result<PathBuf, ConfigError> {
    flag.or(file)
        .or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .ok_or_else(|| kind.missing())
}

/// Same as [`resolve_path`], reading the environment variable for `kind`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingPath`] if no path is configured.
pub fn resolve_path_from_env(
    kind: InputKind,
    flag: Option<PathBuf>,
    file: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    resolve_path(kind, flag, file, std::env::var(kind.env_var()).ok())
}
