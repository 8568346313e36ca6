//! End-to-end terrain generation.

use crate::heightmap::rasterize;
use crate::metadata::Metadata;
use crate::mosaic::mosaic;
use crate::params::{compute_parameters, true_origin, TerrainParameters, TrueOrigin};
use crate::sampler::sample_grid;
use crate::scratch::ScratchDir;
use crate::Result;
use geoterra_coords::{haversine_distance, TileSpan};
use geoterra_dem::ElevationSource;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default sampler grid resolution, matching the downloader's heightmap
/// resolution setting.
pub const DEFAULT_GRID_RESOLUTION: u32 = 11;

/// Settings for terrain generation runs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Edge length of the sampled elevation grid.
    pub grid_resolution: u32,
    /// Root directory generated model assets are written under.
    pub output_root: PathBuf,
}

/// Where a finished run left its artifacts.
#[derive(Debug)]
pub struct GenerationReport {
    /// Model name (the model directory's basename).
    pub model: String,
    /// Placement parameters for the descriptor writer.
    pub parameters: TerrainParameters,
    /// True origin of the generated patch.
    pub origin: TrueOrigin,
    /// Final path of the stitched orthophoto.
    pub aerial_path: PathBuf,
    /// Final path of the heightmap.
    pub heightmap_path: PathBuf,
    /// Final path of the parameters record.
    pub parameters_path: PathBuf,
}

/// The record written alongside the rasters for the external
/// world-descriptor writer.
#[derive(Serialize)]
struct ParameterRecord<'a> {
    #[serde(flatten)]
    parameters: &'a TerrainParameters,
    origin: &'a TrueOrigin,
}

/// One-shot terrain generation pipeline over an injected elevation source.
///
/// The pipeline owns no tile data; aerial tiles are read from the model
/// directory, elevations come from the source, and two runs must not
/// target the same output model directory concurrently.
pub struct TerrainPipeline<S> {
    config: PipelineConfig,
    source: S,
}

impl<S: ElevationSource> TerrainPipeline<S> {
    /// Create a pipeline with the given settings and elevation source.
    pub fn new(config: PipelineConfig, source: S) -> Self {
        Self { config, source }
    }

    /// The injected elevation source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate terrain assets for one model directory.
    ///
    /// `model_dir` must contain the downloader's `metadata.json` and the
    /// aerial tile pyramid `{zoom}/{x}/{y}.<ext>`. On success the mosaic
    /// and heightmap land under `<output_root>/<model>/textures/` and the
    /// parameters record under `<output_root>/<model>/`; on failure only
    /// scratch space is touched, and it is cleaned up.
    pub fn generate(&self, model_dir: &Path) -> Result<GenerationReport> {
        let model = model_name(model_dir);
        let metadata = Metadata::load(model_dir)?;
        let quad = metadata.bounds_quad()?;

        let span = TileSpan::square(&quad, metadata.zoom_level)?;
        let bounds = span.true_boundaries();
        info!(
            model = %model,
            zoom = metadata.zoom_level,
            tiles = span.width(),
            "snapped request to square tile coverage"
        );

        let scratch = ScratchDir::create(&self.config.output_root.join(".scratch"), &model)?;

        // Orthophoto
        let aerial_name = format!("{model}_aerial.png");
        let composite = mosaic(model_dir, &span)?;
        composite.save(scratch.file(&aerial_name))?;
        info!(
            model = %model,
            width = composite.width(),
            height = composite.height(),
            "stitched orthophoto"
        );

        // Elevation field over the covered footprint
        let size_x = haversine_distance(bounds.southwest, bounds.southeast);
        let size_y = haversine_distance(bounds.southeast, bounds.northeast);
        let grid = sample_grid(
            &self.source,
            bounds.southwest,
            size_x,
            size_y,
            self.config.grid_resolution,
        )?;
        let field = grid.into_field()?;

        // Heightmap
        let heightmap_name = format!("{model}_height_map.png");
        rasterize(&field).save(scratch.file(&heightmap_name))?;

        // Placement parameters
        let origin = true_origin(&bounds, &self.source)?;
        let parameters = compute_parameters(&bounds, &field, origin.elevation);
        info!(
            model = %model,
            size_x = parameters.size_x,
            size_y = parameters.size_y,
            size_z = parameters.size_z,
            pose_z = parameters.pose_z,
            "computed terrain parameters"
        );

        let parameters_name = format!("{model}_terrain.json");
        let record = ParameterRecord {
            parameters: &parameters,
            origin: &origin,
        };
        fs::write(
            scratch.file(&parameters_name),
            serde_json::to_string_pretty(&record)?,
        )?;

        // Everything succeeded: promote the staged outputs
        let model_root = self.config.output_root.join(&model);
        let textures = model_root.join("textures");
        fs::create_dir_all(&textures)?;

        let aerial_path = textures.join(&aerial_name);
        let heightmap_path = textures.join(&heightmap_name);
        let parameters_path = model_root.join(&parameters_name);
        scratch.promote(&aerial_name, &aerial_path)?;
        scratch.promote(&heightmap_name, &heightmap_path)?;
        scratch.promote(&parameters_name, &parameters_path)?;

        Ok(GenerationReport {
            model,
            parameters,
            origin,
            aerial_path,
            heightmap_path,
            parameters_path,
        })
    }
}

/// Model name from the model directory's basename.
fn model_name(model_dir: &Path) -> String {
    model_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "terrain".to_string())
}
