//! Orthophoto mosaicking.

use crate::{Result, TerrainError};
use geoterra_coords::TileSpan;
use image::{imageops, RgbImage};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stitch the aerial tiles covered by `span` into one composite image.
///
/// Tiles are expected under `tile_root/{zoom}/{x}/{y}.<ext>`. Every
/// tile-column directory within the span's x-range is assembled into a
/// vertical strip (tiles sorted by numeric y, ascending), strips are then
/// concatenated left to right in directory-name order.
///
/// A column whose pixel dimensions disagree with the first assembled
/// column is dropped with a warning rather than failing the run; partially
/// downloaded tile sets at the mosaic edge are expected. Finding no tiles
/// at all is [`TerrainError::EmptyTileSet`].
pub fn mosaic(tile_root: &Path, span: &TileSpan) -> Result<RgbImage> {
    let zoom_dir = tile_root.join(span.zoom.to_string());

    let empty = || TerrainError::EmptyTileSet {
        root: tile_root.to_path_buf(),
        zoom: span.zoom,
    };

    if !zoom_dir.is_dir() {
        return Err(empty());
    }

    // Columns are read and stacked in parallel; each is an independent set
    // of tile files.
    let dirs = column_dirs(&zoom_dir, span)?;
    let columns: Vec<(String, RgbImage)> = dirs
        .into_par_iter()
        .map(|(name, dir)| {
            Ok(assemble_column(&dir, span)?.map(|image| (name, image)))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    let mut columns = columns.into_iter();
    let Some((first_name, reference)) = columns.next() else {
        return Err(empty());
    };

    let (ref_width, ref_height) = reference.dimensions();
    debug!(column = %first_name, width = ref_width, height = ref_height, "reference column");

    let mut kept = vec![reference];
    for (name, column) in columns {
        if column.dimensions() == (ref_width, ref_height) {
            kept.push(column);
        } else {
            warn!(
                column = %name,
                width = column.width(),
                height = column.height(),
                expected_width = ref_width,
                expected_height = ref_height,
                "dropping column with mismatched dimensions"
            );
        }
    }

    let mut canvas = RgbImage::new(ref_width * kept.len() as u32, ref_height);
    for (i, column) in kept.iter().enumerate() {
        imageops::replace(&mut canvas, column, (i as u32 * ref_width) as i64, 0);
    }

    Ok(canvas)
}

/// Tile-column directories within the span's x-range, sorted by name.
fn column_dirs(zoom_dir: &Path, span: &TileSpan) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(zoom_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let Ok(x) = name.parse::<u32>() else {
            continue;
        };
        if x >= span.min_x && x <= span.max_x {
            dirs.push((name, entry.path()));
        }
    }

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Stack one column's tiles (ascending y) into a vertical strip.
///
/// Returns `None` when the directory holds no tiles within the y-range.
/// A tile whose dimensions disagree with the column's first tile is
/// dropped with a warning, mirroring the column-level policy.
fn assemble_column(dir: &Path, span: &TileSpan) -> Result<Option<RgbImage>> {
    let mut tiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(y) = stem.parse::<u32>() else {
            continue;
        };
        if y >= span.min_y && y <= span.max_y {
            tiles.push((y, path));
        }
    }

    tiles.sort_by_key(|(y, _)| *y);

    let mut images: Vec<RgbImage> = Vec::with_capacity(tiles.len());
    for (y, path) in tiles {
        let image = image::open(&path)?.to_rgb8();
        if let Some(first) = images.first() {
            if image.dimensions() != first.dimensions() {
                warn!(
                    tile = %path.display(),
                    y,
                    "dropping tile with mismatched dimensions"
                );
                continue;
            }
        }
        images.push(image);
    }

    let Some(first) = images.first() else {
        return Ok(None);
    };

    let (width, height) = first.dimensions();
    let mut strip = RgbImage::new(width, height * images.len() as u32);
    for (i, image) in images.iter().enumerate() {
        imageops::replace(&mut strip, image, 0, (i as u32 * height) as i64);
    }

    Ok(Some(strip))
}
