#![forbid(unsafe_code)]

//! Construction-time geometry errors.

use std::fmt;

/// A track or value sequence that cannot back a slider.
///
/// Raised only while building a [`Track`](crate::geometry::Track) or
/// [`ValueSequence`](crate::resolver::ValueSequence); once built, every
/// interaction path is total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidGeometry {
    /// The track has no cells (or the value sequence is empty).
    EmptyTrack,
    /// Width is zero, negative, or not finite.
    InvalidWidth { width: f64 },
    /// An index passed to a free geometry function lies outside the track.
    IndexOutOfRange { index: usize, cell_count: usize },
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrack => write!(f, "track must contain at least one cell"),
            Self::InvalidWidth { width } => {
                write!(f, "invalid track width {width} (must be finite and > 0)")
            }
            Self::IndexOutOfRange { index, cell_count } => {
                write!(
                    f,
                    "cell index {index} out of range for a track of {cell_count} cells"
                )
            }
        }
    }
}

impl std::error::Error for InvalidGeometry {}
