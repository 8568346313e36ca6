//! The downloader's metadata record.

use crate::Result;
use geoterra_coords::RawQuad;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the metadata record the tile downloader leaves in each model
/// directory.
pub const METADATA_FILE: &str = "metadata.json";

/// The subset of the downloader's metadata record the pipeline consumes.
///
/// The record carries more fields (name, attribution, tile size, ...); only
/// the bounds quad and the zoom level drive generation.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    /// Comma-joined `west,south,east,north` bounds.
    pub bounds: String,
    /// Zoom level the aerial tiles were downloaded at.
    pub zoom_level: u8,
}

impl Metadata {
    /// Load the metadata record from a model directory.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let raw = fs::read_to_string(model_dir.join(METADATA_FILE))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Parse the bounds string into a raw quad.
    pub fn bounds_quad(&self) -> Result<RawQuad> {
        Ok(RawQuad::from_csv(&self.bounds)?)
    }
}
