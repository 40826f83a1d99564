#![forbid(unsafe_code)]

//! Track geometry: index, progress, and pixel conversions.
//!
//! A [`Track`] is a horizontal strip of `cell_count` equal-width cells. All
//! conversions here are pure. The free functions validate their raw inputs
//! and return [`InvalidGeometry`]; the same operations on an already-built
//! [`Track`] are total.
//!
//! # Invariants
//!
//! 1. [`Progress`] is always inside `[0, 1]`; NaN collapses to `0`.
//! 2. `index_for_progress` is monotonic, maps `0 → 0` and `1 → cell_count - 1`.
//! 3. `index_for_progress(progress_for_index(i)) == i` for every valid `i`.
//! 4. `thumb_offset` always lies in `[0, width - cell_width]`, so a thumb one
//!    cell wide never leaves the track.

use crate::error::InvalidGeometry;

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Normalized position along a track, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    /// Leading edge of the track.
    pub const START: Self = Self(0.0);
    /// Trailing edge of the track.
    pub const END: Self = Self(1.0);

    /// Clamp a raw ratio into a progress value.
    #[must_use]
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            Self::START
        } else {
            Self(raw.clamp(0.0, 1.0))
        }
    }

    /// The underlying ratio.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Halfway point between two progress values.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self((self.0 + other.0) / 2.0)
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

// ---------------------------------------------------------------------------
// AnchorMode
// ---------------------------------------------------------------------------

/// How a raw pixel position is normalized before picking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorMode {
    /// Divide by the full track width. Cell `i` owns `[i·w/n, (i+1)·w/n)`.
    #[default]
    Edge,
    /// Divide by the width the thumb centre can travel (`width - cell_width`).
    Center,
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// A validated strip of equal-width cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    cell_count: usize,
    width: f64,
}

impl Track {
    /// Build a track, rejecting empty or zero-width geometry.
    pub fn new(cell_count: usize, width: f64) -> Result<Self, InvalidGeometry> {
        if cell_count == 0 {
            return Err(InvalidGeometry::EmptyTrack);
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(InvalidGeometry::InvalidWidth { width });
        }
        Ok(Self { cell_count, width })
    }

    /// Same cell count, new width (e.g. after a layout pass).
    pub fn with_width(&self, width: f64) -> Result<Self, InvalidGeometry> {
        Self::new(self.cell_count, width)
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Track width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Index of the last cell.
    #[inline]
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.cell_count - 1
    }

    /// Width of one cell, which is also the thumb width.
    #[inline]
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.width / self.cell_count as f64
    }

    /// Cell under a progress value.
    #[must_use]
    pub fn index_for_progress(&self, progress: Progress) -> usize {
        cell_at(progress, self.cell_count)
    }

    /// Pixel centre of a cell. Indices past the end are clamped to the last cell.
    #[must_use]
    pub fn position_for_index(&self, index: usize) -> f64 {
        let index = index.min(self.last_index());
        self.width * (index as f64 / self.cell_count as f64) + self.cell_width() / 2.0
    }

    /// Progress of a cell's centre.
    #[must_use]
    pub fn progress_for_index(&self, index: usize) -> Progress {
        Progress::new(self.position_for_index(index) / self.width)
    }

    /// Progress at the centre of the first cell.
    #[must_use]
    pub fn start_progress(&self) -> Progress {
        self.progress_for_index(0)
    }

    /// Progress at the centre of the last cell.
    #[must_use]
    pub fn end_progress(&self) -> Progress {
        self.progress_for_index(self.last_index())
    }

    /// Leading-edge offset of a one-cell-wide thumb centred on `progress`.
    #[must_use]
    pub fn thumb_offset(&self, progress: Progress) -> f64 {
        let cell_width = self.cell_width();
        let max = (self.width - cell_width).max(0.0);
        (self.width * progress.get() - cell_width / 2.0)
            .max(0.0)
            .min(max)
    }

    /// Width of the fill drawn from the leading edge to the thumb's far side.
    #[must_use]
    pub fn highlight_width(&self, progress: Progress) -> f64 {
        self.thumb_offset(progress) + self.cell_width()
    }

    /// Cell under a pixel position measured from the track's leading edge.
    #[must_use]
    pub fn index_for_pixel(&self, position: f64, anchor: AnchorMode) -> usize {
        let span = match anchor {
            AnchorMode::Edge => self.width,
            AnchorMode::Center => self.width - self.cell_width(),
        };
        if span <= 0.0 {
            return 0;
        }
        self.index_for_progress(Progress::new(position / span))
    }
}

pub(crate) fn cell_at(progress: Progress, cell_count: usize) -> usize {
    let raw = (cell_count as f64 * progress.get()).floor() as usize;
    raw.min(cell_count - 1)
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// `floor(cell_count · progress)`, clamped to `[0, cell_count - 1]`.
pub fn index_for_progress(progress: f64, cell_count: usize) -> Result<usize, InvalidGeometry> {
    if cell_count == 0 {
        return Err(InvalidGeometry::EmptyTrack);
    }
    Ok(cell_at(Progress::new(progress), cell_count))
}

/// Pixel centre of cell `index`.
pub fn position_for_index(
    index: usize,
    width: f64,
    cell_count: usize,
) -> Result<f64, InvalidGeometry> {
    let track = checked_index(index, width, cell_count)?;
    Ok(track.position_for_index(index))
}

/// Normalized centre of cell `index`.
pub fn progress_for_index(
    index: usize,
    width: f64,
    cell_count: usize,
) -> Result<f64, InvalidGeometry> {
    let track = checked_index(index, width, cell_count)?;
    Ok(track.progress_for_index(index).get())
}

/// Thumb leading-edge offset, clamped to `[0, width - cell_width]`.
pub fn thumb_offset(progress: f64, width: f64, cell_count: usize) -> Result<f64, InvalidGeometry> {
    Ok(Track::new(cell_count, width)?.thumb_offset(Progress::new(progress)))
}

/// Cell under a pixel position, using the given normalization.
pub fn index_for_pixel(
    position: f64,
    width: f64,
    cell_count: usize,
    anchor: AnchorMode,
) -> Result<usize, InvalidGeometry> {
    Ok(Track::new(cell_count, width)?.index_for_pixel(position, anchor))
}

fn checked_index(index: usize, width: f64, cell_count: usize) -> Result<Track, InvalidGeometry> {
    let track = Track::new(cell_count, width)?;
    if index >= cell_count {
        return Err(InvalidGeometry::IndexOutOfRange { index, cell_count });
    }
    Ok(track)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
