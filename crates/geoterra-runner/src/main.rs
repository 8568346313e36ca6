//! geoterra CLI: generate simulator terrain assets from downloaded map
//! tiles.

mod config;
mod error;

use clap::Parser;
use config::{ConfigFile, Overrides, RunnerConfig};
use error::RunnerError;
use geoterra_dem::DemReader;
use geoterra_terrain::{PipelineConfig, TerrainPipeline};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Generate simulator terrain assets from downloaded map tiles.
///
/// Reads the model directory's metadata record and aerial tile pyramid,
/// stitches the orthophoto, samples a DEM-backed heightmap, and writes
/// both rasters plus a terrain parameters record under the output root.
#[derive(Debug, Parser)]
#[command(name = "geoterra", version, about)]
struct Args {
    /// Model directory containing metadata.json and the aerial tile
    /// pyramid.
    model_dir: PathBuf,

    /// JSON config file with runner settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root of the DEM tile store (overrides the config file).
    #[arg(long)]
    dem_root: Option<PathBuf>,

    /// Zoom level of the DEM tiles (overrides the config file).
    #[arg(long)]
    dem_zoom: Option<u8>,

    /// Edge length of the sampled elevation grid (overrides the config
    /// file).
    #[arg(long)]
    resolution: Option<u32>,

    /// Root directory generated model assets are written under (overrides
    /// the config file).
    #[arg(long)]
    output_root: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("terrain generation failed: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), RunnerError> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let overrides = Overrides {
        dem_root: args.dem_root,
        dem_zoom: args.dem_zoom,
        grid_resolution: args.resolution,
        output_root: args.output_root,
    };
    let config = RunnerConfig::resolve(file, overrides)?;

    info!(
        model_dir = %args.model_dir.display(),
        dem_root = %config.dem_root.display(),
        dem_zoom = config.dem_zoom,
        "starting terrain generation"
    );

    let reader = DemReader::new(&config.dem_root, config.dem_zoom)?;
    let pipeline = TerrainPipeline::new(
        PipelineConfig {
            grid_resolution: config.grid_resolution,
            output_root: config.output_root,
        },
        reader,
    );

    let report = pipeline.generate(&args.model_dir)?;

    info!(
        model = %report.model,
        aerial = %report.aerial_path.display(),
        heightmap = %report.heightmap_path.display(),
        "terrain generation complete"
    );
    println!(
        "{}: size {} x {} m, vertical extent {:.1} m, origin offset {:.1} m",
        report.model,
        report.parameters.size_x,
        report.parameters.size_y,
        report.parameters.size_z,
        report.parameters.pose_z,
    );
    println!("parameters written to {}", report.parameters_path.display());

    Ok(())
}
