//! Single terrain-RGB elevation tile.

use crate::Result;
use geoterra_coords::{BoundingBox, TileIndex};
use image::RgbImage;
use std::path::Path;

/// Decode one terrain-RGB pixel into an elevation in meters.
///
/// Channels are read in R,G,B order per the standard terrain-RGB encoding:
/// `elevation = (R * 65536 + G * 256 + B) * 0.1 - 10000`.
pub fn decode_rgb(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 * 65536.0 + g as f64 * 256.0 + b as f64) * 0.1 - 10000.0
}

/// One elevation tile decoded into memory.
#[derive(Debug)]
pub struct DemTile {
    pixels: RgbImage,
    index: TileIndex,
    /// Geographic bounds of the tile, cached at load time.
    bounds: BoundingBox,
}

impl DemTile {
    /// Load an elevation tile from a raster file.
    pub fn from_file<P: AsRef<Path>>(path: P, index: TileIndex) -> Result<Self> {
        let pixels = image::open(path.as_ref())?.to_rgb8();
        Ok(Self::from_image(pixels, index))
    }

    /// Build a tile from an already decoded raster.
    pub fn from_image(pixels: RgbImage, index: TileIndex) -> Self {
        let bounds = index.bounds();
        Self {
            pixels,
            index,
            bounds,
        }
    }

    /// The tile's index in the store.
    pub fn index(&self) -> TileIndex {
        self.index
    }

    /// Tile dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }

    /// Elevation at a geographic coordinate inside this tile.
    ///
    /// The pixel is located proportionally within the tile's lat/lon
    /// bounds. Image rows increase downward while latitude increases
    /// upward, so the y axis is inverted. Coordinates outside the tile
    /// clamp to the edge pixels.
    pub fn elevation_at(&self, lat: f64, lon: f64) -> f64 {
        let lat_max = self.bounds.northwest.lat;
        let lat_min = self.bounds.southwest.lat;
        let lon_min = self.bounds.northwest.lon;
        let lon_max = self.bounds.northeast.lon;

        let width = self.pixels.width();
        let height = self.pixels.height();

        let px = ((lon - lon_min) / (lon_max - lon_min) * width as f64) as u32;
        let py = ((lat_max - lat) / (lat_max - lat_min) * height as f64) as u32;
        let px = px.min(width - 1);
        let py = py.min(height - 1);

        let pixel = self.pixels.get_pixel(px, py);
        decode_rgb(pixel[0], pixel[1], pixel[2])
    }
}
