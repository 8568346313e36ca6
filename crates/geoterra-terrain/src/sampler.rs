//! Geodesic grid sampling over an elevation source.

use crate::field::SampledGrid;
use crate::Result;
use geoterra_coords::{destination, GeoPoint};
use geoterra_dem::ElevationSource;
use rayon::prelude::*;
use tracing::debug;

/// Sample a `resolution × resolution` elevation grid anchored at a
/// southwest corner.
///
/// Row `y` is anchored `height_m / resolution * y` meters north of the
/// corner (bearing 0°); each column `x` in the row lies
/// `width_m / resolution * x` meters east of the anchor (bearing 90°).
/// Offsets are geodesic, not flat-earth, so the grid stays accurate over
/// degree-scale spans. Samples come back in row-major order with row 0
/// southernmost.
///
/// Rows are sampled in parallel; each elevation query is independent and
/// side-effect-free, and the source is only read.
pub fn sample_grid<S>(
    source: &S,
    southwest: GeoPoint,
    width_m: f64,
    height_m: f64,
    resolution: u32,
) -> Result<SampledGrid>
where
    S: ElevationSource + ?Sized,
{
    let step_x = width_m / resolution as f64;
    let step_y = height_m / resolution as f64;

    let rows: Vec<Vec<(GeoPoint, Option<f64>)>> = (0..resolution)
        .into_par_iter()
        .map(|y| -> Result<Vec<(GeoPoint, Option<f64>)>> {
            let anchor = destination(southwest, 0.0, step_y * y as f64);
            let mut row = Vec::with_capacity(resolution as usize);
            for x in 0..resolution {
                let point = destination(anchor, 90.0, step_x * x as f64);
                let elevation = source.elevation_at(point.lat, point.lon)?;
                row.push((point, elevation));
            }
            Ok(row)
        })
        .collect::<Result<_>>()?;

    let mut samples = Vec::with_capacity((resolution * resolution) as usize);
    let mut first_hole = None;
    for (point, elevation) in rows.into_iter().flatten() {
        if elevation.is_none() && first_hole.is_none() {
            first_hole = Some((point.lat, point.lon));
        }
        samples.push(elevation);
    }

    let grid = SampledGrid::new(samples, resolution, first_hole);
    debug!(
        resolution,
        holes = grid.holes(),
        "sampled elevation grid"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerrainError;
    use geoterra_dem::{ElevationSource, Result as DemResult};

    /// Synthetic surface whose elevation is a linear function of latitude.
    struct Slope;

    impl ElevationSource for Slope {
        fn elevation_at(&self, lat: f64, _lon: f64) -> DemResult<Option<f64>> {
            Ok(Some(lat * 100.0))
        }
    }

    /// Surface with no coverage east of a longitude cutoff.
    struct HoleEastOf(f64);

    impl ElevationSource for HoleEastOf {
        fn elevation_at(&self, lat: f64, lon: f64) -> DemResult<Option<f64>> {
            if lon > self.0 {
                Ok(None)
            } else {
                Ok(Some(lat))
            }
        }
    }

    #[test]
    fn test_grid_shape_and_row_order() {
        let sw = GeoPoint::new(45.0, 7.0);
        let grid = sample_grid(&Slope, sw, 1000.0, 1000.0, 4).unwrap();
        let field = grid.into_field().unwrap();

        assert_eq!(field.samples().len(), 16);
        assert_eq!(field.resolution(), 4);

        // Row 0 is southernmost, so elevations (∝ latitude) increase with
        // the row index.
        let south = field.samples()[0];
        let north = field.samples()[12];
        assert!(north > south);

        // Within a row the latitude is constant under an eastward step, so
        // the slope surface reads almost flat.
        let row0_spread = (field.samples()[3] - field.samples()[0]).abs();
        assert!(row0_spread < 1e-3);
    }

    #[test]
    fn test_first_sample_is_southwest_corner() {
        let sw = GeoPoint::new(45.0, 7.0);
        let grid = sample_grid(&Slope, sw, 500.0, 500.0, 3).unwrap();
        let field = grid.into_field().unwrap();
        // Zero offset in both axes: exactly the corner elevation
        assert_eq!(field.samples()[0], 4500.0);
    }

    #[test]
    fn test_holes_are_surfaced() {
        let sw = GeoPoint::new(45.0, 7.0);
        // Cutoff sits inside the grid's width, so eastern columns are holes
        let grid = sample_grid(&HoleEastOf(7.003), sw, 1000.0, 1000.0, 4).unwrap();
        assert!(grid.holes() > 0);

        match grid.into_field() {
            Err(TerrainError::MissingElevation { lon, .. }) => {
                assert!(lon > 7.003);
            }
            other => panic!("expected MissingElevation, got {other:?}"),
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let sw = GeoPoint::new(44.5, 7.5);
        let a = sample_grid(&Slope, sw, 2000.0, 2000.0, 8)
            .unwrap()
            .into_field()
            .unwrap();
        let b = sample_grid(&Slope, sw, 2000.0, 2000.0, 8)
            .unwrap()
            .into_field()
            .unwrap();
        assert_eq!(a.samples(), b.samples());
    }
}
