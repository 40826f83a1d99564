#![forbid(unsafe_code)]

//! Value resolution: mapping domain values onto track cells and back.
//!
//! The forward direction (`progress → value`) is shared: a progress value
//! always lands on a concrete cell, and the value of that cell is returned.
//! Values are never interpolated; only positions are.
//!
//! The reverse direction (`value → cells`) depends on what the value type can
//! do, so it is a [`ValueResolver`] strategy chosen by type parameter:
//!
//! - [`ExactMatch`] needs only equality. A value missing from the sequence
//!   falls back to the first cell, `(0, 0)`. That fallback is indistinguishable
//!   from "the first value is selected"; callers that need to tell them apart
//!   should check [`ValueSequence::contains`] first.
//! - [`OrderedInterpolation`] needs a total order. A value missing from the
//!   sequence resolves to the pair of neighbours it falls between, and the
//!   thumb rests halfway between them. Below-range values pin to the first
//!   cell, above-range values to the last.
//!
//! Interpolation assumes the sequence is sorted ascending; with an unsorted
//! sequence the neighbour search still terminates but the pair is arbitrary.

use crate::error::InvalidGeometry;
use crate::geometry::{Progress, Track, cell_at};

// ---------------------------------------------------------------------------
// CellSpan
// ---------------------------------------------------------------------------

/// The cell (or pair of neighbouring cells) a value resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSpan {
    pub left: usize,
    pub right: usize,
}

impl CellSpan {
    /// A value sitting exactly on one cell.
    #[must_use]
    pub const fn exact(index: usize) -> Self {
        Self {
            left: index,
            right: index,
        }
    }

    /// A value falling between two cells.
    #[must_use]
    pub const fn between(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Whether both sides name the same cell.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.left == self.right
    }

    /// Where the thumb rests for this span: the mean of both cell centres.
    #[must_use]
    pub fn resting_progress(self, track: &Track) -> Progress {
        track
            .progress_for_index(self.left)
            .midpoint(track.progress_for_index(self.right))
    }
}

impl From<(usize, usize)> for CellSpan {
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Maps a value onto the cells of a sequence.
pub trait ValueResolver<V> {
    /// Cells `value` occupies within `values`. `values` is never empty.
    fn value_indices(values: &[V], value: &V) -> CellSpan;
}

/// Equality-only lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExactMatch;

impl<V: PartialEq> ValueResolver<V> for ExactMatch {
    fn value_indices(values: &[V], value: &V) -> CellSpan {
        values
            .iter()
            .position(|v| v == value)
            .map_or(CellSpan::exact(0), CellSpan::exact)
    }
}

/// Ordered lookup that interpolates between neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderedInterpolation;

impl<V: Ord> ValueResolver<V> for OrderedInterpolation {
    fn value_indices(values: &[V], value: &V) -> CellSpan {
        if let Some(index) = values.iter().position(|v| v == value) {
            return CellSpan::exact(index);
        }
        let prev = values.iter().rposition(|v| v < value);
        let next = values.iter().position(|v| v > value);
        match (prev, next) {
            (Some(prev), Some(next)) => CellSpan::between(prev, next),
            (None, _) => CellSpan::exact(0),
            (Some(_), None) => CellSpan::exact(values.len().saturating_sub(1)),
        }
    }
}

// ---------------------------------------------------------------------------
// ValueSequence
// ---------------------------------------------------------------------------

/// A non-empty, ordered list of selectable values, one per cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueSequence<V> {
    values: Vec<V>,
}

impl<V> ValueSequence<V> {
    /// Collect a sequence, rejecting an empty one.
    pub fn new(values: impl IntoIterator<Item = V>) -> Result<Self, InvalidGeometry> {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return Err(InvalidGeometry::EmptyTrack);
        }
        Ok(Self { values })
    }

    /// Number of values (and cells).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence has no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// A track with one cell per value.
    pub fn track(&self, width: f64) -> Result<Track, InvalidGeometry> {
        Track::new(self.values.len(), width)
    }

    /// Cell index under a progress value.
    #[must_use]
    pub fn index_for_progress(&self, progress: Progress) -> usize {
        cell_at(progress, self.values.len())
    }

    /// The value of the cell under `progress`.
    #[must_use]
    pub fn resolved_value(&self, progress: Progress) -> &V {
        &self.values[self.index_for_progress(progress)]
    }

    /// Cells `value` occupies under strategy `R`.
    #[must_use]
    pub fn value_indices<R: ValueResolver<V>>(&self, value: &V) -> CellSpan {
        R::value_indices(&self.values, value)
    }

    /// Resting thumb progress for `value` under strategy `R`.
    #[must_use]
    pub fn resting_progress<R: ValueResolver<V>>(&self, value: &V, track: &Track) -> Progress {
        self.value_indices::<R>(value).resting_progress(track)
    }
}

impl<V: PartialEq> ValueSequence<V> {
    /// Whether `value` appears verbatim in the sequence.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.values.contains(value)
    }

    /// Index of the first cell equal to `value`.
    #[must_use]
    pub fn position(&self, value: &V) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
}

impl<'a, V> IntoIterator for &'a ValueSequence<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
