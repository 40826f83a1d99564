#![forbid(unsafe_code)]

//! Core: step geometry, value resolution, and drag reconciliation.
//!
//! # Role in stepslider
//! `stepslider-core` is the engine behind a discrete slider: a track of N
//! equal cells, one per value, with a thumb that snaps to cells and rests
//! between them for ordered values that are not enumerated. Nothing here
//! draws or vibrates; the widget layer (`stepslider-widgets`) hands the
//! results to a render sink and a haptic sink.
//!
//! # Primary responsibilities
//! - **geometry**: index ⇄ progress ⇄ pixel conversions on a validated [`Track`].
//! - **resolver**: value ⇄ cell mapping with [`ExactMatch`] or
//!   [`OrderedInterpolation`] strategies.
//! - **direction**: pointer-to-progress mapping under LTR and RTL layout.
//! - **reconciler**: the [`DragReconciler`] state machine, commit policies,
//!   and edge-crossing feedback.
//! - **adjust**: one-step increment/decrement for accessibility actions.
//!
//! # How it fits in the system
//! Pointer samples flow direction → reconciler → resolver → geometry. When no
//! drag is active, the committed selection flows resolver → geometry to place
//! the thumb at rest.

pub mod adjust;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod reconciler;
pub mod resolver;

pub use adjust::{AdjustDirection, adjusted_index};
pub use direction::{LayoutDirection, progress_for_pointer, visual_thumb_x};
pub use error::InvalidGeometry;
pub use geometry::{AnchorMode, Progress, Track};
pub use reconciler::{
    CommitPolicy, DragReconciler, DragState, Feedback, PointerPhase, PointerSample,
};
pub use resolver::{CellSpan, ExactMatch, OrderedInterpolation, ValueResolver, ValueSequence};
