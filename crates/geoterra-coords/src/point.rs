//! Geographic points, bounding boxes, and raw bounds quads.

use crate::{CoordError, Result};

/// Maximum latitude representable in Web Mercator (arctan(sinh(π))).
pub const MAX_MERCATOR_LAT: f64 = 85.0511;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees (positive = north).
    pub lat: f64,
    /// Longitude in degrees (positive = east).
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude clamped to the Web Mercator validity range.
    pub fn mercator_lat(&self) -> f64 {
        self.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
    }
}

/// The four corner points of a rectangular geographic region.
///
/// Corners are stored individually rather than as min/max scalars because
/// the square-snapping step derives each corner from a different tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Northwest corner.
    pub northwest: GeoPoint,
    /// Northeast corner.
    pub northeast: GeoPoint,
    /// Southwest corner.
    pub southwest: GeoPoint,
    /// Southeast corner.
    pub southeast: GeoPoint,
}

impl BoundingBox {
    /// Centroid of the four corners.
    pub fn center(&self) -> GeoPoint {
        let lat =
            (self.northwest.lat + self.northeast.lat + self.southwest.lat + self.southeast.lat)
                / 4.0;
        let lon =
            (self.northwest.lon + self.northeast.lon + self.southwest.lon + self.southeast.lon)
                / 4.0;
        GeoPoint::new(lat, lon)
    }

    /// Check if a coordinate is within the bounds.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.southwest.lat
            && lat <= self.northwest.lat
            && lon >= self.northwest.lon
            && lon <= self.northeast.lon
    }
}

/// A raw `(west, south, east, north)` bounds quad as produced by the tile
/// downloader's metadata record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawQuad {
    /// Western longitude in degrees.
    pub west: f64,
    /// Southern latitude in degrees.
    pub south: f64,
    /// Eastern longitude in degrees.
    pub east: f64,
    /// Northern latitude in degrees.
    pub north: f64,
}

impl RawQuad {
    /// Parse a comma-joined `west,south,east,north` string.
    pub fn from_csv(raw: &str) -> Result<Self> {
        let parts: Vec<f64> = raw
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| CoordError::InvalidBounds(raw.to_string()))?;

        if parts.len() != 4 {
            return Err(CoordError::InvalidBounds(raw.to_string()));
        }

        Ok(Self {
            west: parts[0],
            south: parts[1],
            east: parts[2],
            north: parts[3],
        })
    }

    /// Northwest corner of the quad.
    pub fn northwest(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.west)
    }

    /// Northeast corner of the quad.
    pub fn northeast(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.east)
    }

    /// Southwest corner of the quad.
    pub fn southwest(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.west)
    }

    /// Southeast corner of the quad.
    pub fn southeast(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.east)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounds_csv() {
        let quad = RawQuad::from_csv("7.1,45.2,7.5,45.6").unwrap();
        assert_eq!(quad.west, 7.1);
        assert_eq!(quad.south, 45.2);
        assert_eq!(quad.east, 7.5);
        assert_eq!(quad.north, 45.6);
    }

    #[test]
    fn test_parse_bounds_with_spaces() {
        let quad = RawQuad::from_csv(" -122.5, 47.4, -122.2, 47.7 ").unwrap();
        assert_eq!(quad.west, -122.5);
        assert_eq!(quad.north, 47.7);
    }

    #[test]
    fn test_parse_bounds_rejects_garbage() {
        assert!(RawQuad::from_csv("").is_err());
        assert!(RawQuad::from_csv("1,2,3").is_err());
        assert!(RawQuad::from_csv("1,2,3,4,5").is_err());
        assert!(RawQuad::from_csv("a,b,c,d").is_err());
    }

    #[test]
    fn test_quad_corners() {
        let quad = RawQuad::from_csv("7.1,45.2,7.5,45.6").unwrap();
        assert_eq!(quad.northwest(), GeoPoint::new(45.6, 7.1));
        assert_eq!(quad.southeast(), GeoPoint::new(45.2, 7.5));
    }

    #[test]
    fn test_mercator_lat_clamps_poles() {
        assert_eq!(GeoPoint::new(90.0, 0.0).mercator_lat(), MAX_MERCATOR_LAT);
        assert_eq!(GeoPoint::new(-90.0, 0.0).mercator_lat(), -MAX_MERCATOR_LAT);
        assert_eq!(GeoPoint::new(47.5, 0.0).mercator_lat(), 47.5);
    }

    #[test]
    fn test_bounding_box_center() {
        let bbox = BoundingBox {
            northwest: GeoPoint::new(46.0, 7.0),
            northeast: GeoPoint::new(46.0, 8.0),
            southwest: GeoPoint::new(45.0, 7.0),
            southeast: GeoPoint::new(45.0, 8.0),
        };
        let center = bbox.center();
        assert_eq!(center.lat, 45.5);
        assert_eq!(center.lon, 7.5);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox {
            northwest: GeoPoint::new(46.0, 7.0),
            northeast: GeoPoint::new(46.0, 8.0),
            southwest: GeoPoint::new(45.0, 7.0),
            southeast: GeoPoint::new(45.0, 8.0),
        };
        assert!(bbox.contains(45.5, 7.5));
        assert!(bbox.contains(45.0, 7.0)); // corner
        assert!(!bbox.contains(44.9, 7.5));
        assert!(!bbox.contains(45.5, 8.1));
    }
}
