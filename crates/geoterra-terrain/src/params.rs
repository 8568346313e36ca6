//! Terrain placement parameters.

use crate::field::ElevationField;
use crate::{Result, TerrainError};
use geoterra_coords::{haversine_distance, BoundingBox};
use geoterra_dem::ElevationSource;
use serde::Serialize;

/// Vertical clearance added below the terrain's lowest point so it always
/// sits under the placement origin.
const POSE_CLEARANCE_M: f64 = 5.0;

/// Physical footprint and vertical placement of a generated terrain patch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerrainParameters {
    /// West-east extent in whole meters.
    pub size_x: u32,
    /// South-north extent in whole meters.
    pub size_y: u32,
    /// Vertical extent of the elevation field in meters.
    pub size_z: f64,
    /// Vertical offset of the placement origin in meters.
    pub pose_z: f64,
}

/// The centroid of the true boundaries together with its DEM elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrueOrigin {
    /// Origin latitude in degrees.
    pub lat: f64,
    /// Origin longitude in degrees.
    pub lon: f64,
    /// Elevation at the origin in meters.
    pub elevation: f64,
}

/// Derive the placement parameters for a terrain patch.
///
/// Footprint sizes are the geodesic distances along the southern and
/// eastern edges of the true boundaries, truncated to whole meters.
/// `pose_z` lowers the origin so the terrain's lowest point sits
/// [`POSE_CLEARANCE_M`] below it.
pub fn compute_parameters(
    bounds: &BoundingBox,
    field: &ElevationField,
    origin_elevation: f64,
) -> TerrainParameters {
    let size_x = haversine_distance(bounds.southwest, bounds.southeast) as u32;
    let size_y = haversine_distance(bounds.southeast, bounds.northeast) as u32;

    let min = field.min();
    let max = field.max();

    TerrainParameters {
        size_x,
        size_y,
        size_z: max - min,
        pose_z: -(origin_elevation - min + POSE_CLEARANCE_M),
    }
}

/// Resolve the true origin of a boundary: its centroid and the DEM
/// elevation there.
///
/// A hole at the centroid is fatal; the origin elevation anchors the whole
/// vertical placement.
pub fn true_origin<S>(bounds: &BoundingBox, source: &S) -> Result<TrueOrigin>
where
    S: ElevationSource + ?Sized,
{
    let center = bounds.center();
    let elevation = source
        .elevation_at(center.lat, center.lon)?
        .ok_or(TerrainError::MissingOriginElevation {
            lat: center.lat,
            lon: center.lon,
        })?;

    Ok(TrueOrigin {
        lat: center.lat,
        lon: center.lon,
        elevation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geoterra_coords::GeoPoint;
    use geoterra_dem::Result as DemResult;

    fn test_bounds() -> BoundingBox {
        BoundingBox {
            northwest: GeoPoint::new(45.1, 7.0),
            northeast: GeoPoint::new(45.1, 7.1),
            southwest: GeoPoint::new(45.0, 7.0),
            southeast: GeoPoint::new(45.0, 7.1),
        }
    }

    #[test]
    fn test_vertical_parameters_fixture() {
        // min=100, max=250, origin=180 -> size_z=150, pose_z=-85
        let field = ElevationField::new(vec![100.0, 250.0, 180.0, 120.0], 2);
        let params = compute_parameters(&test_bounds(), &field, 180.0);
        assert_eq!(params.size_z, 150.0);
        assert_eq!(params.pose_z, -85.0);
    }

    #[test]
    fn test_footprint_matches_geodesic_edges() {
        let bounds = test_bounds();
        let field = ElevationField::new(vec![0.0; 4], 2);
        let params = compute_parameters(&bounds, &field, 0.0);

        // 0.1 degrees of latitude is ~11.1 km; 0.1 degrees of longitude at
        // 45°N is ~7.9 km.
        assert!((params.size_y as i64 - 11_120).abs() < 100);
        assert!((params.size_x as i64 - 7_860).abs() < 100);
    }

    #[test]
    fn test_true_origin_is_centroid() {
        struct Fixed;
        impl ElevationSource for Fixed {
            fn elevation_at(&self, _lat: f64, _lon: f64) -> DemResult<Option<f64>> {
                Ok(Some(321.0))
            }
        }

        let origin = true_origin(&test_bounds(), &Fixed).unwrap();
        assert_relative_eq!(origin.lat, 45.05, epsilon = 1e-12);
        assert_relative_eq!(origin.lon, 7.05, epsilon = 1e-12);
        assert_eq!(origin.elevation, 321.0);
    }

    #[test]
    fn test_true_origin_hole_is_fatal() {
        struct Nothing;
        impl ElevationSource for Nothing {
            fn elevation_at(&self, _lat: f64, _lon: f64) -> DemResult<Option<f64>> {
                Ok(None)
            }
        }

        match true_origin(&test_bounds(), &Nothing) {
            Err(TerrainError::MissingOriginElevation { lat, lon }) => {
                assert_relative_eq!(lat, 45.05, epsilon = 1e-12);
                assert_relative_eq!(lon, 7.05, epsilon = 1e-12);
            }
            other => panic!("expected MissingOriginElevation, got {other:?}"),
        }
    }
}
