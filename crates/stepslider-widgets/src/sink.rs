#![forbid(unsafe_code)]

//! Collaborator traits: where feedback and frames go.

use stepslider_core::Feedback;

use crate::frame::SliderFrame;

/// Receives feedback events, typically to drive platform haptics.
pub trait HapticSink {
    /// The selection (or the shadow value of a deferred drag) changed.
    fn selection_changed(&mut self);

    /// A drag crossed into the first or last cell.
    fn edge_reached(&mut self);

    /// Dispatch a [`Feedback`] to the matching method.
    fn play(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::SelectionChanged => self.selection_changed(),
            Feedback::EdgeReached => self.edge_reached(),
        }
    }
}

/// Discards all feedback.
impl HapticSink for () {
    fn selection_changed(&mut self) {}

    fn edge_reached(&mut self) {}
}

/// Records feedback in arrival order.
impl HapticSink for Vec<Feedback> {
    fn selection_changed(&mut self) {
        self.push(Feedback::SelectionChanged);
    }

    fn edge_reached(&mut self) {
        self.push(Feedback::EdgeReached);
    }
}

/// Receives a fresh frame after every processed sample or selection change.
pub trait RenderSink<V> {
    fn render(&mut self, frame: &SliderFrame<'_, V>);
}

impl<V, F> RenderSink<V> for F
where
    F: FnMut(&SliderFrame<'_, V>),
{
    fn render(&mut self, frame: &SliderFrame<'_, V>) {
        self(frame);
    }
}
