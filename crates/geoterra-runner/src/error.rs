//! Error types for the runner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or executing a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("Invalid config file {path}: {source}")]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// No DEM store was configured.
    #[error("No DEM tile store configured (set --dem-root or dem_root in the config file)")]
    MissingDemRoot,

    /// DEM reader setup failure.
    #[error(transparent)]
    Dem(#[from] geoterra_dem::DemError),

    /// Generation run failure.
    #[error(transparent)]
    Terrain(#[from] geoterra_terrain::TerrainError),
}
