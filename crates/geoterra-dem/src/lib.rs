//! # geoterra-dem
//!
//! Digital Elevation Model (DEM) reader for terrain-RGB tile stores.
//!
//! Elevation tiles are fixed-size square rasters whose pixels encode
//! elevation across the red, green, and blue channels:
//!
//! ```text
//! elevation = (R * 65536 + G * 256 + B) * 0.1 - 10000   (meters)
//! ```
//!
//! Tiles live on disk in the Slippy Map layout `root/{zoom}/{x}/{y}.png`,
//! deposited there by an external downloader. This crate only reads them.
//!
//! Missing coverage is not an error: querying a coordinate whose backing
//! tile file is absent yields `Ok(None)`, and callers decide whether that
//! hole is fatal for their run.
//!
//! ## Example
//!
//! ```no_run
//! use geoterra_dem::{DemReader, ElevationSource};
//!
//! let reader = DemReader::new("dem_tiles", 11)?;
//! match reader.elevation_at(47.6062, -122.3321)? {
//!     Some(elevation) => println!("Seattle elevation: {elevation} meters"),
//!     None => println!("no DEM coverage"),
//! }
//! # Ok::<(), geoterra_dem::DemError>(())
//! ```

mod error;
mod reader;
mod source;
mod tile;

pub use error::DemError;
pub use reader::DemReader;
pub use source::ElevationSource;
pub use tile::{decode_rgb, DemTile};

/// Result type for DEM operations.
pub type Result<T> = std::result::Result<T, DemError>;
