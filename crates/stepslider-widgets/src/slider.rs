#![forbid(unsafe_code)]

//! Step slider control.
//!
//! [`Slider`] ties a value sequence, a track, and a drag reconciler together
//! and talks to the outside world through two sinks: a [`HapticSink`] for
//! feedback and a [`RenderSink`] for frames. The committed selection is
//! owned by the caller and lent to each interaction.
//!
//! Two flavours differ only in how a selection maps back onto the track:
//!
//! - [`StepSlider`] for ordered values; off-grid values rest between their
//!   neighbours.
//! - [`StepPicker`] for values with equality only; off-grid values rest on
//!   the first cell.
//!
//! Three interactions change the selection: pointer drags
//! ([`handle_pointer`](Slider::handle_pointer)), taps on a cell
//! ([`tap`](Slider::tap)), and one-step accessibility adjustments
//! ([`adjust`](Slider::adjust)). Taps and adjustments are discrete and always
//! commit immediately; they are ignored while a drag is in progress.

use std::marker::PhantomData;

use stepslider_core::{
    AdjustDirection, CellSpan, DragReconciler, ExactMatch, InvalidGeometry, OrderedInterpolation,
    PointerSample, Track, ValueResolver, ValueSequence, adjusted_index, visual_thumb_x,
};

use crate::config::SliderConfig;
use crate::frame::{CellFlags, SliderFrame};
use crate::sink::{HapticSink, RenderSink};

/// Slider over ordered values.
pub type StepSlider<V> = Slider<V, OrderedInterpolation>;

/// Slider over values that only support equality.
pub type StepPicker<V> = Slider<V, ExactMatch>;

/// A discrete slider with resolver strategy `R`.
#[derive(Debug, Clone)]
pub struct Slider<V, R = OrderedInterpolation> {
    values: ValueSequence<V>,
    track: Track,
    config: SliderConfig,
    reconciler: DragReconciler<V>,
    _resolver: PhantomData<R>,
}

impl<V, R> Slider<V, R>
where
    V: Clone + PartialEq,
    R: ValueResolver<V>,
{
    /// Build a slider. Fails on an empty sequence or an unusable width.
    pub fn new(
        values: impl IntoIterator<Item = V>,
        width: f64,
        config: SliderConfig,
    ) -> Result<Self, InvalidGeometry> {
        let values = ValueSequence::new(values)?;
        let track = values.track(width)?;
        Ok(Self {
            values,
            track,
            config,
            reconciler: DragReconciler::new(config.commit_policy, config.direction),
            _resolver: PhantomData,
        })
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &ValueSequence<V> {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the configuration. Changing policy or direction cancels any
    /// drag in progress.
    pub fn set_config(&mut self, config: SliderConfig) {
        self.reconciler.set_policy(config.commit_policy);
        self.reconciler.set_direction(config.direction);
        self.config = config;
    }

    /// Apply a new track width after layout. The old track is kept on error.
    pub fn resize(&mut self, width: f64) -> Result<(), InvalidGeometry> {
        self.track = self.track.with_width(width)?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.reconciler.is_dragging()
    }

    /// Cells the selection maps to.
    #[must_use]
    pub fn cell_span(&self, selection: &V) -> CellSpan {
        self.values.value_indices::<R>(selection)
    }

    /// The value the thumb label should show.
    #[must_use]
    pub fn display_value<'a>(&'a self, selection: &'a V) -> &'a V {
        self.reconciler.display_value(selection)
    }

    /// Feed one pointer sample. Returns `true` if the committed selection
    /// changed.
    pub fn handle_pointer(
        &mut self,
        sample: PointerSample,
        selection: &mut V,
        haptics: &mut impl HapticSink,
    ) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "slider.pointer",
            phase = ?sample.phase,
            x = sample.x,
            dragging = self.reconciler.is_dragging()
        )
        .entered();

        let before = selection.clone();
        for feedback in self
            .reconciler
            .process(sample, &self.values, &self.track, selection)
        {
            haptics.play(feedback);
        }
        *selection != before
    }

    /// Select the cell under physical `x`. Returns `true` if the selection
    /// changed.
    pub fn tap(&mut self, x: f64, selection: &mut V, haptics: &mut impl HapticSink) -> bool {
        if self.reconciler.is_dragging() {
            return false;
        }
        let leading = self.config.direction.to_leading(x, self.track.width());
        let index = self.track.index_for_pixel(leading, self.config.tap_anchor);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slider.tap", x, index);
        self.commit_index(index, selection, haptics)
    }

    /// Step one cell in `direction`. No-op past either end or during a drag.
    /// Returns `true` if the selection changed.
    pub fn adjust(
        &mut self,
        direction: AdjustDirection,
        selection: &mut V,
        haptics: &mut impl HapticSink,
    ) -> bool {
        if self.reconciler.is_dragging() {
            return false;
        }
        let span = self.cell_span(selection);
        let Some(index) = adjusted_index(span, self.values.len(), direction) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slider.adjust", direction = ?direction, index);
        self.commit_index(index, selection, haptics)
    }

    /// Compute the frame for the current state.
    #[must_use]
    pub fn frame<'a>(&'a self, selection: &'a V) -> SliderFrame<'a, V> {
        let track = &self.track;
        let progress = self
            .reconciler
            .thumb_progress::<R>(&self.values, track, selection);
        let thumb_offset = track.thumb_offset(progress);
        let highlight_width = track.highlight_width(progress);
        let label = self.display_value(selection);
        let thumb_cell = track.index_for_progress(progress);

        let cells = self
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let mut flags = CellFlags::empty();
                flags.set(CellFlags::SELECTED, value == selection);
                flags.set(CellFlags::DISPLAYED, value == label);
                flags.set(
                    CellFlags::FILLED,
                    track.position_for_index(index) <= highlight_width,
                );
                flags.set(CellFlags::UNDER_THUMB, index == thumb_cell);
                flags
            })
            .collect();

        SliderFrame {
            progress,
            thumb_offset,
            thumb_x: visual_thumb_x(thumb_offset, track, self.config.direction),
            thumb_width: track.cell_width(),
            highlight_width,
            direction: self.config.direction,
            dragging: self.reconciler.is_dragging(),
            label,
            cells,
        }
    }

    /// Hand the current frame to `sink`.
    pub fn render(&self, selection: &V, sink: &mut impl RenderSink<V>) {
        sink.render(&self.frame(selection));
    }

    /// Process a sample, then render the resulting frame.
    pub fn interact(
        &mut self,
        sample: PointerSample,
        selection: &mut V,
        haptics: &mut impl HapticSink,
        sink: &mut impl RenderSink<V>,
    ) -> bool {
        let changed = self.handle_pointer(sample, selection, haptics);
        self.render(selection, sink);
        changed
    }

    fn commit_index(
        &self,
        index: usize,
        selection: &mut V,
        haptics: &mut impl HapticSink,
    ) -> bool {
        let Some(value) = self.values.get(index) else {
            return false;
        };
        if value == selection {
            return false;
        }
        *selection = value.clone();
        haptics.selection_changed();
        true
    }
}
