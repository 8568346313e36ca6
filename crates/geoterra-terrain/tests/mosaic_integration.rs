//! Integration tests for the orthophoto mosaicker against synthetic tile
//! trees.

use geoterra_coords::TileSpan;
use geoterra_terrain::{mosaic, TerrainError};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn test_span() -> TileSpan {
    TileSpan {
        zoom: 10,
        min_x: 536,
        max_x: 538,
        min_y: 370,
        max_y: 372,
    }
}

fn write_tile(root: &Path, zoom: u8, x: u32, y: u32, size: u32, color: Rgb<u8>) {
    let dir = root.join(zoom.to_string()).join(x.to_string());
    fs::create_dir_all(&dir).unwrap();
    RgbImage::from_pixel(size, size, color)
        .save(dir.join(format!("{y}.png")))
        .unwrap();
}

#[test]
fn test_full_grid_stitches_to_square() {
    let root = TempDir::new().unwrap();
    let span = test_span();

    for x in span.min_x..=span.max_x {
        for y in span.min_y..=span.max_y {
            // Encode the tile position in the pixel color
            let color = Rgb([(x - span.min_x) as u8 * 100, (y - span.min_y) as u8 * 100, 0]);
            write_tile(root.path(), span.zoom, x, y, 256, color);
        }
    }

    let composite = mosaic(root.path(), &span).unwrap();
    assert_eq!(composite.dimensions(), (768, 768));

    // Column order is west to east, tile order within a column north to
    // south.
    assert_eq!(*composite.get_pixel(0, 0), Rgb([0, 0, 0]));
    assert_eq!(*composite.get_pixel(300, 0), Rgb([100, 0, 0]));
    assert_eq!(*composite.get_pixel(600, 0), Rgb([200, 0, 0]));
    assert_eq!(*composite.get_pixel(0, 300), Rgb([0, 100, 0]));
    assert_eq!(*composite.get_pixel(0, 600), Rgb([0, 200, 0]));
}

#[test]
fn test_mismatched_column_is_dropped() {
    let root = TempDir::new().unwrap();
    let span = test_span();

    for x in span.min_x..=span.max_x {
        for y in span.min_y..=span.max_y {
            // The middle column was downloaded at the wrong tile size
            let size = if x == 537 { 128 } else { 256 };
            write_tile(root.path(), span.zoom, x, y, size, Rgb([10, 20, 30]));
        }
    }

    let composite = mosaic(root.path(), &span).unwrap();
    // Two surviving 256-wide columns
    assert_eq!(composite.dimensions(), (512, 768));
}

#[test]
fn test_tiles_outside_range_are_ignored() {
    let root = TempDir::new().unwrap();
    let span = test_span();

    for x in span.min_x..=span.max_x {
        for y in span.min_y..=span.max_y {
            write_tile(root.path(), span.zoom, x, y, 256, Rgb([50, 50, 50]));
        }
    }
    // Stray tiles beyond the span in both axes
    write_tile(root.path(), span.zoom, 536, 369, 256, Rgb([255, 0, 0]));
    write_tile(root.path(), span.zoom, 536, 373, 256, Rgb([255, 0, 0]));
    write_tile(root.path(), span.zoom, 539, 370, 256, Rgb([255, 0, 0]));

    let composite = mosaic(root.path(), &span).unwrap();
    assert_eq!(composite.dimensions(), (768, 768));
    assert!(composite.pixels().all(|p| *p == Rgb([50, 50, 50])));
}

#[test]
fn test_mismatched_tile_within_column_is_dropped() {
    let root = TempDir::new().unwrap();
    let span = test_span();

    for x in span.min_x..=span.max_x {
        for y in span.min_y..=span.max_y {
            write_tile(root.path(), span.zoom, x, y, 256, Rgb([50, 50, 50]));
        }
    }
    // Replace one middle tile with a wrong-sized raster: its whole column
    // shrinks and is then dropped at the column check.
    write_tile(root.path(), span.zoom, 537, 371, 64, Rgb([1, 2, 3]));

    let composite = mosaic(root.path(), &span).unwrap();
    assert_eq!(composite.dimensions(), (512, 768));
}

#[test]
fn test_empty_store_fails() {
    let root = TempDir::new().unwrap();
    let span = test_span();

    match mosaic(root.path(), &span) {
        Err(TerrainError::EmptyTileSet { zoom, .. }) => assert_eq!(zoom, 10),
        other => panic!("expected EmptyTileSet, got {other:?}"),
    }
}

#[test]
fn test_tiles_only_outside_range_fails() {
    let root = TempDir::new().unwrap();
    let span = test_span();
    write_tile(root.path(), span.zoom, 100, 100, 256, Rgb([1, 1, 1]));

    assert!(matches!(
        mosaic(root.path(), &span),
        Err(TerrainError::EmptyTileSet { .. })
    ));
}
