//! Example: Query elevation from a terrain-RGB tile store.
//!
//! Usage: cargo run --example query_elevation -- <lat> <lon> [dem_dir] [zoom]

use geoterra_dem::{DemReader, ElevationSource};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <lat> <lon> [dem_dir] [zoom]", args[0]);
        eprintln!("Example: {} 47.6062 -122.3321 ./dem_tiles 11", args[0]);
        std::process::exit(1);
    }

    let lat: f64 = args[1].parse().expect("Invalid latitude");
    let lon: f64 = args[2].parse().expect("Invalid longitude");
    let dem_dir = args.get(3).map(|s| s.as_str()).unwrap_or("dem_tiles");
    let zoom: u8 = args
        .get(4)
        .map(|s| s.parse().expect("Invalid zoom"))
        .unwrap_or(11);

    let reader = DemReader::new(dem_dir, zoom).expect("Failed to open tile store");

    println!("Querying elevation at ({}, {})...", lat, lon);
    let start = Instant::now();

    match reader.elevation_at(lat, lon) {
        Ok(Some(elevation)) => {
            println!(
                "Elevation: {:.2} meters (loaded in {:.3}s)",
                elevation,
                start.elapsed().as_secs_f64()
            );
        }
        Ok(None) => {
            eprintln!("No DEM tile in store for this coordinate");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    // Second query should be fast (tile already decoded)
    let cached_start = Instant::now();
    if let Ok(Some(elevation)) = reader.elevation_at(lat, lon) {
        println!(
            "Elevation (cached): {:.2} meters in {:.6}s",
            elevation,
            cached_start.elapsed().as_secs_f64()
        );
    }
}
