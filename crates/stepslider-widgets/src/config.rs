#![forbid(unsafe_code)]

//! Slider configuration.

use stepslider_core::{AnchorMode, CommitPolicy, LayoutDirection};

/// Behaviour knobs for a [`Slider`](crate::slider::Slider).
///
/// Passed explicitly at construction; nothing is looked up from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SliderConfig {
    /// When drags commit (default: immediately).
    pub commit_policy: CommitPolicy,
    /// Layout direction of the track (default: left-to-right).
    pub direction: LayoutDirection,
    /// How taps on the track pick a cell (default: edge-anchored).
    pub tap_anchor: AnchorMode,
}

impl SliderConfig {
    #[must_use]
    pub fn commit_policy(mut self, policy: CommitPolicy) -> Self {
        self.commit_policy = policy;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn tap_anchor(mut self, anchor: AnchorMode) -> Self {
        self.tap_anchor = anchor;
        self
    }
}
