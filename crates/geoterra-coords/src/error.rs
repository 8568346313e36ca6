//! Error types for coordinate math.

use thiserror::Error;

/// Errors that can occur during coordinate and tile conversions.
#[derive(Debug, Error)]
pub enum CoordError {
    /// Invalid zoom level.
    #[error("Invalid zoom level {0} (must be 0-22)")]
    InvalidZoom(u8),

    /// Bounds string could not be parsed as `west,south,east,north`.
    #[error("Invalid bounds string {0:?} (expected west,south,east,north)")]
    InvalidBounds(String),
}
