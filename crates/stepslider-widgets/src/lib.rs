#![forbid(unsafe_code)]

//! Discrete step slider controls for stepslider.
//!
//! The control layer over `stepslider-core`: it owns a value sequence, a
//! track and a drag reconciler, applies taps and accessibility steps, and
//! reports through a [`HapticSink`] and a [`RenderSink`]. Drawing, theming and
//! platform haptics live in the host.

pub mod config;
pub mod frame;
pub mod sink;
pub mod slider;

pub use config::SliderConfig;
pub use frame::{CellFlags, SliderFrame};
pub use sink::{HapticSink, RenderSink};
pub use slider::{Slider, StepPicker, StepSlider};

pub use stepslider_core::{
    AdjustDirection, AnchorMode, CommitPolicy, Feedback, InvalidGeometry, LayoutDirection,
    PointerPhase, PointerSample,
};
