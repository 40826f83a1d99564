#![forbid(unsafe_code)]

//! Render output: everything a shell needs to draw one slider frame.

use bitflags::bitflags;
use stepslider_core::{LayoutDirection, Progress};

bitflags! {
    /// Per-cell highlight state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// The committed selection equals this cell's value.
        const SELECTED    = 0b0001;
        /// The thumb label shows this cell's value.
        const DISPLAYED   = 0b0010;
        /// The cell's centre lies inside the highlight fill.
        const FILLED      = 0b0100;
        /// The thumb's centre is over this cell.
        const UNDER_THUMB = 0b1000;
    }
}

/// One frame of slider output.
///
/// `thumb_offset` and `highlight_width` are measured from the track's leading
/// edge; `thumb_x` is the physical left edge of the thumb, already mirrored
/// under right-to-left layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame<'a, V> {
    pub progress: Progress,
    pub thumb_offset: f64,
    pub thumb_x: f64,
    pub thumb_width: f64,
    pub highlight_width: f64,
    pub direction: LayoutDirection,
    /// A drag is in progress; shells typically lift or enlarge the thumb.
    pub dragging: bool,
    /// Value for the thumb label.
    pub label: &'a V,
    /// One entry per cell, in sequence order.
    pub cells: Vec<CellFlags>,
}

impl<V> SliderFrame<'_, V> {
    /// Index of the cell flagged `UNDER_THUMB`.
    #[must_use]
    pub fn thumb_cell(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.contains(CellFlags::UNDER_THUMB))
    }

    /// Index of the cell flagged `SELECTED`, if the selection is on the grid.
    #[must_use]
    pub fn selected_cell(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.contains(CellFlags::SELECTED))
    }

    /// Physical x range of the highlight fill.
    #[must_use]
    pub fn highlight_span(&self, track_width: f64) -> (f64, f64) {
        match self.direction {
            LayoutDirection::LeftToRight => (0.0, self.highlight_width),
            LayoutDirection::RightToLeft => (track_width - self.highlight_width, track_width),
        }
    }
}
