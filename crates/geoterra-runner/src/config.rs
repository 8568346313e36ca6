//! Runner configuration.
//!
//! Settings come from an optional JSON config file with per-flag CLI
//! overrides; nothing is global or mutable once a run starts.

use crate::error::RunnerError;
use geoterra_terrain::DEFAULT_GRID_RESOLUTION;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default zoom level of the elevation tile store.
pub const DEFAULT_DEM_ZOOM: u8 = 11;

fn default_dem_zoom() -> u8 {
    DEFAULT_DEM_ZOOM
}

fn default_grid_resolution() -> u32 {
    DEFAULT_GRID_RESOLUTION
}

fn default_output_root() -> PathBuf {
    PathBuf::from("output")
}

/// Persistent runner settings, loadable from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Root of the elevation tile store.
    pub dem_root: Option<PathBuf>,
    /// Zoom level of the elevation tiles.
    pub dem_zoom: Option<u8>,
    /// Edge length of the sampled elevation grid.
    pub grid_resolution: Option<u32>,
    /// Root directory generated model assets are written under.
    pub output_root: Option<PathBuf>,
}

impl ConfigFile {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| RunnerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Root of the elevation tile store.
    pub dem_root: PathBuf,
    /// Zoom level of the elevation tiles.
    pub dem_zoom: u8,
    /// Edge length of the sampled elevation grid.
    pub grid_resolution: u32,
    /// Root directory generated model assets are written under.
    pub output_root: PathBuf,
}

/// CLI-provided overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dem_root: Option<PathBuf>,
    pub dem_zoom: Option<u8>,
    pub grid_resolution: Option<u32>,
    pub output_root: Option<PathBuf>,
}

impl RunnerConfig {
    /// Resolve the final settings from a config file and CLI overrides.
    ///
    /// CLI flags win over the file; defaults fill the rest. A DEM store
    /// root must come from one of the two.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self, RunnerError> {
        let dem_root = overrides
            .dem_root
            .or(file.dem_root)
            .ok_or(RunnerError::MissingDemRoot)?;

        Ok(Self {
            dem_root,
            dem_zoom: overrides
                .dem_zoom
                .or(file.dem_zoom)
                .unwrap_or_else(default_dem_zoom),
            grid_resolution: overrides
                .grid_resolution
                .or(file.grid_resolution)
                .unwrap_or_else(default_grid_resolution),
            output_root: overrides
                .output_root
                .or(file.output_root)
                .unwrap_or_else(default_output_root),
        })
    }
}
