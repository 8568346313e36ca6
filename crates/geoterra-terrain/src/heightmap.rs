//! Heightmap rasterization.

use crate::field::ElevationField;
use image::{imageops, GrayImage, Luma};

/// Output heightmap edge length.
///
/// Terrain engines require square heightmaps with 2^n + 1 pixels per side
/// (..., 513, 1025); 1025 is the fixed output size of this pipeline.
pub const HEIGHTMAP_SIZE: u32 = 1025;

/// Sigma of the post-resize smoothing pass.
const SMOOTHING_SIGMA: f32 = 0.5;

/// Normalize an elevation field into an 8-bit grayscale image at the
/// field's native resolution.
///
/// The field's minimum maps to 0 and its maximum to 255. A flat field maps
/// to all zeros. Pixel (0, 0) corresponds to the field's first sample, the
/// southwest corner.
pub fn normalize(field: &ElevationField) -> GrayImage {
    let min = field.min();
    let max = field.max();
    let range = max - min;
    let resolution = field.resolution();
    let samples = field.samples();

    GrayImage::from_fn(resolution, resolution, |x, y| {
        let value = samples[(y * resolution + x) as usize];
        let byte = if range > 0.0 {
            ((value - min) / range * 255.0) as u8
        } else {
            0
        };
        Luma([byte])
    })
}

/// Rasterize an elevation field into the final heightmap.
///
/// Normalizes the field, bilinearly resizes it to
/// [`HEIGHTMAP_SIZE`]×[`HEIGHTMAP_SIZE`], applies a light smoothing pass,
/// and flips vertically so row 0 of the output is the northern edge as the
/// target engine's Y-up convention expects.
pub fn rasterize(field: &ElevationField) -> GrayImage {
    let native = normalize(field);
    let resized = imageops::resize(
        &native,
        HEIGHTMAP_SIZE,
        HEIGHTMAP_SIZE,
        imageops::FilterType::Triangle,
    );
    let smoothed = imageops::blur(&resized, SMOOTHING_SIGMA);
    imageops::flip_vertical(&smoothed)
}
