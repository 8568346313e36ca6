//! # geoterra-terrain
//!
//! The terrain generation pipeline: turns a directory of downloaded map
//! tiles plus an elevation tile store into a stitched orthophoto, a
//! 1025×1025 grayscale heightmap, and the numeric parameters needed to
//! place the patch in a simulator.
//!
//! Stages run in a fixed order per generation run:
//!
//! 1. read the downloader's metadata record and snap its bounds quad to a
//!    square tile coverage ([`geoterra_coords::TileSpan`]),
//! 2. stitch the aerial tiles into one mosaic ([`mosaic`]),
//! 3. sample an elevation grid over the covered area ([`sample_grid`]),
//! 4. rasterize the grid into the heightmap ([`rasterize`]),
//! 5. derive the placement parameters ([`compute_parameters`]).
//!
//! Outputs are staged in a scoped scratch directory ([`ScratchDir`]) and
//! only moved into the final model directory once the whole run has
//! succeeded, so a failed run never leaves partial artifacts behind.

mod error;
mod field;
mod heightmap;
mod metadata;
mod mosaic;
mod params;
mod pipeline;
mod sampler;
mod scratch;

pub use error::TerrainError;
pub use field::{ElevationField, SampledGrid};
pub use heightmap::{normalize, rasterize, HEIGHTMAP_SIZE};
pub use metadata::{Metadata, METADATA_FILE};
pub use mosaic::mosaic;
pub use params::{compute_parameters, true_origin, TerrainParameters, TrueOrigin};
pub use pipeline::{
    GenerationReport, PipelineConfig, TerrainPipeline, DEFAULT_GRID_RESOLUTION,
};
pub use sampler::sample_grid;
pub use scratch::ScratchDir;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, TerrainError>;
