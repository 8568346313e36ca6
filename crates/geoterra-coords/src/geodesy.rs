//! Spherical geodesic helpers.

use crate::GeoPoint;

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the distance between two points using the haversine formula.
///
/// Returns the distance in meters.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Destination point a given distance and bearing from an origin.
///
/// Uses the great-circle forward solution on the same spherical model as
/// [`haversine_distance`]. Bearing is in degrees clockwise from north
/// (0° = north, 90° = east). The returned longitude is normalized to
/// [-180, 180).
pub fn destination(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let angular = distance_m / EARTH_RADIUS_M;
    let bearing_rad = bearing_deg.to_radians();
    let lat1_rad = origin.lat.to_radians();
    let lon1_rad = origin.lon.to_radians();

    let lat2_rad = (lat1_rad.sin() * angular.cos()
        + lat1_rad.cos() * angular.sin() * bearing_rad.cos())
    .asin();
    let lon2_rad = lon1_rad
        + (bearing_rad.sin() * angular.sin() * lat1_rad.cos())
            .atan2(angular.cos() - lat1_rad.sin() * lat2_rad.sin());

    let lon = (lon2_rad.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new(lat2_rad.to_degrees(), lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_seattle_portland() {
        // Seattle to Portland is approximately 233 km
        let seattle = GeoPoint::new(47.6062, -122.3321);
        let portland = GeoPoint::new(45.5152, -122.6784);
        let dist = haversine_distance(seattle, portland);
        assert!((dist - 233_000.0).abs() < 5_000.0);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let p = GeoPoint::new(45.0, 7.0);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_destination_zero_distance_is_origin() {
        let origin = GeoPoint::new(45.0, 7.0);
        let dest = destination(origin, 0.0, 0.0);
        assert_relative_eq!(dest.lat, origin.lat, epsilon = 1e-12);
        assert_relative_eq!(dest.lon, origin.lon, epsilon = 1e-12);
    }

    #[test]
    fn test_destination_north_keeps_longitude() {
        let origin = GeoPoint::new(45.0, 7.0);
        let dest = destination(origin, 0.0, 10_000.0);
        assert!(dest.lat > origin.lat);
        assert_relative_eq!(dest.lon, origin.lon, epsilon = 1e-9);
        // 10 km is roughly 0.09 degrees of latitude
        assert_relative_eq!(dest.lat - origin.lat, 0.0899, epsilon = 1e-3);
    }

    #[test]
    fn test_destination_east_keeps_latitude_at_equator() {
        let origin = GeoPoint::new(0.0, 10.0);
        let dest = destination(origin, 90.0, 10_000.0);
        assert_relative_eq!(dest.lat, 0.0, epsilon = 1e-9);
        assert!(dest.lon > origin.lon);
    }

    #[test]
    fn test_destination_round_trips_distance() {
        let origin = GeoPoint::new(45.0, 7.0);
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0] {
            let dest = destination(origin, bearing, 5_000.0);
            let dist = haversine_distance(origin, dest);
            assert_relative_eq!(dist, 5_000.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_destination_normalizes_longitude() {
        let origin = GeoPoint::new(0.0, 179.9);
        let dest = destination(origin, 90.0, 50_000.0);
        assert!(dest.lon >= -180.0 && dest.lon < 180.0);
        assert!(dest.lon < 0.0, "crossing the antimeridian wraps west");
    }
}
