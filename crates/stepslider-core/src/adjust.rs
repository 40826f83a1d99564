#![forbid(unsafe_code)]

//! Discrete one-step adjustment, as used by accessibility increment/decrement.

use crate::resolver::CellSpan;

/// Direction of a one-step adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustDirection {
    Increment,
    Decrement,
}

/// Index one step away from `span`, or `None` past either end.
///
/// An exact span moves to its neighbour. A span between two cells moves onto
/// the nearer cell in the requested direction (`right` for increment, `left`
/// for decrement), so an off-grid value snaps onto the grid in one step.
#[must_use]
pub fn adjusted_index(span: CellSpan, cell_count: usize, direction: AdjustDirection) -> Option<usize> {
    match direction {
        AdjustDirection::Increment => {
            let next = if span.is_exact() {
                span.right + 1
            } else {
                span.right
            };
            (next < cell_count).then_some(next)
        }
        AdjustDirection::Decrement => {
            if span.is_exact() {
                span.left.checked_sub(1)
            } else {
                Some(span.left)
            }
        }
    }
}
