#![forbid(unsafe_code)]

//! Layout direction: pointer-to-progress mapping for LTR and RTL tracks.
//!
//! Progress always grows in the value sequence's forward direction. Under
//! right-to-left layout the forward direction runs from the physical right
//! edge to the left, so the pointer coordinate is mirrored before it is
//! normalized, and rendered offsets are mirrored back the same way.
//!
//! The pair is consistent: a pointer resting on the centre of a thumb drawn at
//! [`visual_thumb_x`] resolves to the cell the thumb represents, in both
//! directions.

use crate::geometry::{Progress, Track};

/// Horizontal layout direction of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    #[inline]
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// Mirror a physical x coordinate into leading-edge space.
    ///
    /// The mapping is its own inverse.
    #[must_use]
    pub fn to_leading(self, x: f64, width: f64) -> f64 {
        match self {
            Self::LeftToRight => x,
            Self::RightToLeft => width - x,
        }
    }
}

/// Progress for a pointer at physical `x` (relative to the track origin).
#[must_use]
pub fn progress_for_pointer(x: f64, track: &Track, direction: LayoutDirection) -> Progress {
    Progress::new(direction.to_leading(x, track.width()) / track.width())
}

/// Physical x of the thumb's left edge for a leading-edge `offset`.
#[must_use]
pub fn visual_thumb_x(offset: f64, track: &Track, direction: LayoutDirection) -> f64 {
    match direction {
        LayoutDirection::LeftToRight => offset,
        LayoutDirection::RightToLeft => track.width() - offset - track.cell_width(),
    }
}
