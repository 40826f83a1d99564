#![forbid(unsafe_code)]

//! Drag reconciliation: live pointer samples against the committed selection.
//!
//! [`DragReconciler`] is a small state machine fed one [`PointerSample`] at a
//! time. Each sample is turned into a progress value (via the layout
//! direction), the progress into a candidate value, and the candidate is
//! applied according to the [`CommitPolicy`]. The caller owns the committed
//! selection and lends it to [`process`](DragReconciler::process); it is only
//! written at the commit points described below.
//!
//! # State Machine
//!
//! ```text
//!            Start (Immediate)           End / Cancel
//!   Idle ───────────────────────▶ Dragging ───────────▶ Idle
//!     │      Start (Deferred)                End: commit shadow
//!     └─────────────────────────▶ PendingCommit ───────▶ Idle
//!                                               Cancel: drop shadow
//! ```
//!
//! An `End` sample is evaluated like a final `Move` before the gesture
//! closes, so a release position that no `Move` reported still lands.
//!
//! # Invariants
//!
//! 1. Under `Immediate`, the selection follows the candidate on every sample,
//!    and each change emits exactly one `SelectionChanged`.
//! 2. Under `DeferredToDragEnd`, the selection is untouched until `End`; the
//!    shadow value follows the candidate and emits `SelectionChanged` instead.
//! 3. `EdgeReached` fires once per crossing into the first or last cell's
//!    zone, never once per sample while inside it. The first sample of a
//!    gesture has no predecessor and never fires it.
//! 4. After `End` or `Cancel` the state is `Idle`; `PendingCommit` never
//!    survives a terminal sample.
//! 5. While `Idle`, the thumb position derives from the committed selection,
//!    never from stale drag progress.
//!
//! # Failure Modes
//!
//! - `End` or `Cancel` with no gesture in progress is a no-op.
//! - `Move` with no gesture in progress starts one.
//! - `Start` during a gesture abandons the old one (pending shadow dropped,
//!   like `Cancel`) and starts afresh.
//! - `Cancel` does not roll back commits already made under `Immediate`.

use crate::direction::{LayoutDirection, progress_for_pointer};
use crate::geometry::{Progress, Track};
use crate::resolver::{ValueResolver, ValueSequence};

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// When a drag is allowed to change the committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitPolicy {
    /// Every sample that lands on a new cell commits it.
    #[default]
    Immediate,
    /// Samples move a shadow value; the shadow commits when the drag ends.
    DeferredToDragEnd,
}

/// Lifecycle phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One pointer sample, `x` relative to the track's physical origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub phase: PointerPhase,
}

impl PointerSample {
    #[must_use]
    pub const fn new(x: f64, phase: PointerPhase) -> Self {
        Self { x, phase }
    }

    #[must_use]
    pub const fn start(x: f64) -> Self {
        Self::new(x, PointerPhase::Start)
    }

    #[must_use]
    pub const fn moved(x: f64) -> Self {
        Self::new(x, PointerPhase::Move)
    }

    /// Release at `x`; the position is resolved before the gesture closes.
    #[must_use]
    pub const fn end(x: f64) -> Self {
        Self::new(x, PointerPhase::End)
    }

    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(0.0, PointerPhase::Cancel)
    }
}

/// Feedback for the haptic sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The selection (or, while deferring, the shadow value) changed.
    SelectionChanged,
    /// The drag crossed into the first or last cell's zone.
    EdgeReached,
}

// ---------------------------------------------------------------------------
// DragState
// ---------------------------------------------------------------------------

/// Transient drag state, owned by the reconciler.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState<V> {
    Idle,
    /// Immediate-policy drag.
    Dragging { progress: Progress },
    /// Deferred-policy drag holding a not-yet-committed candidate.
    PendingCommit { progress: Progress, shadow: V },
}

impl<V> Default for DragState<V> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<V> DragState<V> {
    /// Live drag progress, if a drag is in progress.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match self {
            Self::Idle => None,
            Self::Dragging { progress } | Self::PendingCommit { progress, .. } => Some(*progress),
        }
    }

    /// Pending shadow value, if any.
    #[must_use]
    pub fn shadow(&self) -> Option<&V> {
        match self {
            Self::PendingCommit { shadow, .. } => Some(shadow),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

// ---------------------------------------------------------------------------
// DragReconciler
// ---------------------------------------------------------------------------

/// Converts pointer samples into selection commits and feedback events.
#[derive(Debug, Clone)]
pub struct DragReconciler<V> {
    policy: CommitPolicy,
    direction: LayoutDirection,
    state: DragState<V>,
}

impl<V: Clone + PartialEq> DragReconciler<V> {
    #[must_use]
    pub fn new(policy: CommitPolicy, direction: LayoutDirection) -> Self {
        Self {
            policy,
            direction,
            state: DragState::Idle,
        }
    }

    /// Process one sample, returning the feedback it produced.
    ///
    /// `selection` is the caller's committed value; it is written only when a
    /// commit happens.
    pub fn process(
        &mut self,
        sample: PointerSample,
        values: &ValueSequence<V>,
        track: &Track,
        selection: &mut V,
    ) -> Vec<Feedback> {
        let mut out = Vec::with_capacity(2);
        match sample.phase {
            PointerPhase::Start => {
                if !self.state.is_idle() {
                    self.cancel();
                }
                self.on_sample(sample.x, values, track, selection, &mut out);
            }
            PointerPhase::Move => self.on_sample(sample.x, values, track, selection, &mut out),
            PointerPhase::End => {
                if !self.state.is_idle() {
                    self.on_sample(sample.x, values, track, selection, &mut out);
                }
                self.on_end(values, selection);
            }
            PointerPhase::Cancel => self.cancel(),
        }
        out
    }

    /// Drop any in-progress gesture without committing.
    pub fn cancel(&mut self) {
        if self.state.is_idle() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "slider.drag.cancel",
            had_shadow = self.state.shadow().is_some()
        );
        self.state = DragState::Idle;
    }

    /// Progress the thumb should be drawn at.
    ///
    /// During a drag this is the live progress; otherwise it is recomputed
    /// from `selection` through resolver `R`.
    #[must_use]
    pub fn thumb_progress<R: ValueResolver<V>>(
        &self,
        values: &ValueSequence<V>,
        track: &Track,
        selection: &V,
    ) -> Progress {
        self.state
            .progress()
            .unwrap_or_else(|| values.resting_progress::<R>(selection, track))
    }

    /// The value to show in the thumb label: the shadow while deferring,
    /// otherwise the committed selection.
    #[must_use]
    pub fn display_value<'a>(&'a self, selection: &'a V) -> &'a V {
        self.state.shadow().unwrap_or(selection)
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &DragState<V> {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !self.state.is_idle()
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// Change the commit policy. Any gesture in progress is cancelled first.
    pub fn set_policy(&mut self, policy: CommitPolicy) {
        if policy != self.policy {
            self.cancel();
            self.policy = policy;
        }
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Change the layout direction. Any gesture in progress is cancelled first.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        if direction != self.direction {
            self.cancel();
            self.direction = direction;
        }
    }
}

// ---------------------------------------------------------------------------
// Internal transitions
// ---------------------------------------------------------------------------

impl<V: Clone + PartialEq> DragReconciler<V> {
    fn on_sample(
        &mut self,
        x: f64,
        values: &ValueSequence<V>,
        track: &Track,
        selection: &mut V,
        out: &mut Vec<Feedback>,
    ) {
        let progress = progress_for_pointer(x, track, self.direction);
        let previous = self.state.progress();
        let candidate = values.resolved_value(progress);

        #[cfg(feature = "tracing")]
        if previous.is_none() {
            tracing::debug!(
                message = "slider.drag.start",
                progress = progress.get(),
                policy = ?self.policy
            );
        }

        self.state = match (self.policy, std::mem::take(&mut self.state)) {
            (CommitPolicy::Immediate, _) => {
                if *candidate != *selection {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        message = "slider.commit",
                        index = values.index_for_progress(progress),
                        deferred = false
                    );
                    *selection = candidate.clone();
                    out.push(Feedback::SelectionChanged);
                }
                DragState::Dragging { progress }
            }
            (CommitPolicy::DeferredToDragEnd, state) => {
                let mut shadow = match state {
                    DragState::PendingCommit { shadow, .. } => shadow,
                    _ => selection.clone(),
                };
                if *candidate != shadow {
                    shadow = candidate.clone();
                    out.push(Feedback::SelectionChanged);
                }
                DragState::PendingCommit { progress, shadow }
            }
        };

        if let Some(previous) = previous
            && crossed_edge(previous, progress, track)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "slider.edge", progress = progress.get());
            out.push(Feedback::EdgeReached);
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn on_end(&mut self, values: &ValueSequence<V>, selection: &mut V) {
        match std::mem::take(&mut self.state) {
            DragState::PendingCommit { shadow, progress } => {
                if shadow != *selection {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        message = "slider.commit",
                        index = values.index_for_progress(progress),
                        deferred = true
                    );
                    *selection = shadow;
                }
            }
            DragState::Dragging { .. } | DragState::Idle => {}
        }
    }
}

/// Whether moving from `previous` to `current` entered an edge zone.
#[must_use]
pub fn crossed_edge(previous: Progress, current: Progress, track: &Track) -> bool {
    let start = track.start_progress();
    let end = track.end_progress();
    (current >= end && previous < end) || (current <= start && previous > start)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::OrderedInterpolation;
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    const WIDTH: f64 = 323.0;

    fn minutes() -> ValueSequence<u32> {
        ValueSequence::new([1, 15, 30, 45, 60, 90]).unwrap()
    }

    /// Pointer x for a progress value under LTR.
    fn x(progress: f64) -> f64 {
        progress * WIDTH
    }

    /// Pointer x at the centre of a cell.
    fn cell_x(index: usize) -> f64 {
        (index as f64 + 0.5) * WIDTH / 6.0
    }

    struct Rig {
        values: ValueSequence<u32>,
        track: Track,
        selection: u32,
        reconciler: DragReconciler<u32>,
    }

    impl Rig {
        fn new(policy: CommitPolicy) -> Self {
            let values = minutes();
            let track = values.track(WIDTH).unwrap();
            Self {
                values,
                track,
                selection: 1,
                reconciler: DragReconciler::new(policy, LayoutDirection::LeftToRight),
            }
        }

        fn feed(&mut self, sample: PointerSample) -> Vec<Feedback> {
            self.reconciler
                .process(sample, &self.values, &self.track, &mut self.selection)
        }

        fn edges(&mut self, samples: &[PointerSample]) -> usize {
            samples
                .iter()
                .flat_map(|s| self.feed(*s))
                .filter(|f| *f == Feedback::EdgeReached)
                .count()
        }
    }

    // --- Immediate ---

    #[test]
    fn immediate_commits_on_start_and_move() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        let fb = rig.feed(PointerSample::start(cell_x(2)));
        assert_eq!(fb, vec![Feedback::SelectionChanged]);
        assert_eq!(rig.selection, 30);
        assert!(matches!(rig.reconciler.state(), DragState::Dragging { .. }));

        let fb = rig.feed(PointerSample::moved(cell_x(4)));
        assert_eq!(fb, vec![Feedback::SelectionChanged]);
        assert_eq!(rig.selection, 60);
    }

    #[test]
    fn immediate_same_cell_is_silent() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        rig.feed(PointerSample::start(cell_x(3)));
        let fb = rig.feed(PointerSample::moved(cell_x(3) + 2.0));
        assert!(fb.is_empty());
    }

    #[test]
    fn immediate_end_returns_to_idle() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        rig.feed(PointerSample::start(cell_x(3)));
        assert!(rig.feed(PointerSample::end(cell_x(3))).is_empty());
        assert!(rig.reconciler.state().is_idle());
        assert_eq!(rig.selection, 45);
    }

    #[test]
    fn immediate_end_resolves_release_position() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        rig.feed(PointerSample::start(cell_x(3)));
        let fb = rig.feed(PointerSample::end(cell_x(1)));
        assert_eq!(fb, vec![Feedback::SelectionChanged]);
        assert_eq!(rig.selection, 15);
        assert!(rig.reconciler.state().is_idle());
    }

    #[test]
    fn immediate_cancel_keeps_commits() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        rig.feed(PointerSample::start(cell_x(5)));
        rig.feed(PointerSample::cancel());
        assert_eq!(rig.selection, 90);
        assert!(rig.reconciler.state().is_idle());
    }

    // --- Deferred ---

    #[test]
    fn deferred_commits_only_at_end() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        let fb = rig.feed(PointerSample::start(cell_x(3)));
        assert_eq!(fb, vec![Feedback::SelectionChanged]);
        assert_eq!(rig.selection, 1);
        assert_eq!(rig.reconciler.state().shadow(), Some(&45));
        assert_eq!(*rig.reconciler.display_value(&rig.selection), 45);

        rig.feed(PointerSample::end(cell_x(3)));
        assert_eq!(rig.selection, 45);
        assert!(rig.reconciler.state().is_idle());
    }

    #[test]
    fn deferred_end_commits_release_position() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        rig.feed(PointerSample::start(cell_x(2)));
        // No move reports the final cell; only the release does.
        let fb = rig.feed(PointerSample::end(cell_x(4)));
        assert_eq!(fb, vec![Feedback::SelectionChanged]);
        assert_eq!(rig.selection, 60);
        assert!(rig.reconciler.state().is_idle());
    }

    #[test]
    fn end_reaching_edge_fires_once() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        let n = rig.edges(&[PointerSample::start(x(0.5)), PointerSample::end(x(1.0))]);
        assert_eq!(n, 1);
        assert_eq!(rig.selection, 90);
    }

    #[test]
    fn deferred_cancel_leaves_selection_untouched() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        rig.feed(PointerSample::start(cell_x(3)));
        rig.feed(PointerSample::moved(cell_x(4)));
        rig.feed(PointerSample::cancel());
        assert_eq!(rig.selection, 1);
        assert!(rig.reconciler.state().is_idle());
        assert_eq!(*rig.reconciler.display_value(&rig.selection), 1);
    }

    #[test]
    fn deferred_shadow_starts_at_selection() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        // Landing on the already-selected cell does not change the shadow.
        let fb = rig.feed(PointerSample::start(cell_x(0)));
        assert!(fb.is_empty());
        assert_eq!(rig.reconciler.state().shadow(), Some(&1));
    }

    #[test]
    fn restart_drops_pending_shadow() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        rig.feed(PointerSample::start(cell_x(4)));
        rig.feed(PointerSample::start(cell_x(2)));
        assert_eq!(rig.reconciler.state().shadow(), Some(&30));
        rig.feed(PointerSample::end(cell_x(2)));
        assert_eq!(rig.selection, 30);
    }

    // --- Terminal events without a gesture ---

    #[test]
    fn end_and_cancel_while_idle_are_no_ops() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        assert!(rig.feed(PointerSample::cancel()).is_empty());
        assert!(rig.feed(PointerSample::end(100.0)).is_empty());
        assert_eq!(rig.selection, 1);
        assert!(rig.reconciler.state().is_idle());
    }

    #[test]
    fn move_while_idle_starts_a_drag() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        rig.feed(PointerSample::moved(cell_x(1)));
        assert!(rig.reconciler.is_dragging());
        assert_eq!(rig.selection, 15);
    }

    // --- Edges ---

    #[test]
    fn edge_crossing_fires_once() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        let n = rig.edges(&[
            PointerSample::start(x(0.9)),
            PointerSample::moved(x(0.93)),
            PointerSample::moved(x(0.96)),
            PointerSample::moved(x(0.99)),
            PointerSample::moved(x(1.0)),
        ]);
        assert_eq!(n, 1);
    }

    #[test]
    fn edge_refires_after_leaving_zone() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        let n = rig.edges(&[
            PointerSample::start(x(0.5)),
            PointerSample::moved(x(1.0)),
            PointerSample::moved(x(0.5)),
            PointerSample::moved(x(1.0)),
            PointerSample::moved(x(0.5)),
            PointerSample::moved(x(0.0)),
        ]);
        assert_eq!(n, 3);
    }

    #[test]
    fn start_inside_zone_does_not_fire() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        let n = rig.edges(&[PointerSample::start(x(1.0)), PointerSample::moved(x(0.99))]);
        assert_eq!(n, 0);
    }

    #[test]
    fn edge_zone_boundaries() {
        let track = Track::new(6, WIDTH).unwrap();
        let end = track.end_progress();
        let start = track.start_progress();
        assert!(crossed_edge(Progress::new(0.5), end, &track));
        assert!(!crossed_edge(end, Progress::END, &track));
        assert!(crossed_edge(Progress::new(0.5), start, &track));
        assert!(!crossed_edge(start, Progress::START, &track));
        assert!(!crossed_edge(Progress::new(0.2), Progress::new(0.8), &track));
    }

    // --- Resting position ---

    #[test]
    fn idle_thumb_follows_committed_selection() {
        let mut rig = Rig::new(CommitPolicy::Immediate);
        rig.feed(PointerSample::start(cell_x(4)));
        rig.feed(PointerSample::moved(cell_x(4) + 10.0));
        rig.feed(PointerSample::end(cell_x(4)));
        // Caller changes the selection externally after the drag.
        rig.selection = 15;
        let p = rig
            .reconciler
            .thumb_progress::<OrderedInterpolation>(&rig.values, &rig.track, &rig.selection);
        assert_eq!(p, rig.track.progress_for_index(1));
    }

    #[test]
    fn dragging_thumb_follows_pointer() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        rig.feed(PointerSample::start(x(0.4)));
        let p = rig
            .reconciler
            .thumb_progress::<OrderedInterpolation>(&rig.values, &rig.track, &rig.selection);
        assert!((p.get() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn rtl_drag_maps_mirrored() {
        let values = minutes();
        let track = values.track(WIDTH).unwrap();
        let mut selection = 1;
        let mut r = DragReconciler::new(CommitPolicy::Immediate, LayoutDirection::RightToLeft);
        r.process(PointerSample::start(cell_x(0)), &values, &track, &mut selection);
        assert_eq!(selection, 90);
        r.process(PointerSample::moved(cell_x(4)), &values, &track, &mut selection);
        assert_eq!(selection, 15);
    }

    #[test]
    fn policy_change_cancels_gesture() {
        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        rig.feed(PointerSample::start(cell_x(5)));
        rig.reconciler.set_policy(CommitPolicy::Immediate);
        assert!(rig.reconciler.state().is_idle());
        assert_eq!(rig.selection, 1);
    }

    #[cfg(feature = "tracing")]
    #[derive(Debug, Clone, PartialEq)]
    struct DragEvent {
        message: String,
        deferred: Option<bool>,
    }

    #[cfg(feature = "tracing")]
    struct DragTraceCapture {
        events: Arc<Mutex<Vec<DragEvent>>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for DragTraceCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            struct Fields {
                message: Option<String>,
                deferred: Option<bool>,
            }
            impl tracing::field::Visit for Fields {
                fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
                    if field.name() == "deferred" {
                        self.deferred = Some(value);
                    }
                }

                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.message = Some(value.to_string());
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                    }
                }
            }
            let mut fields = Fields {
                message: None,
                deferred: None,
            };
            event.record(&mut fields);
            if let Some(message) = fields.message {
                self.events.lock().expect("drag trace lock").push(DragEvent {
                    message,
                    deferred: fields.deferred,
                });
            }
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn drag_tracing_reports_deferred_commit_and_cancel() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(DragTraceCapture {
            events: Arc::clone(&events),
        });
        let _guard = tracing::subscriber::set_default(subscriber);
        tracing::callsite::rebuild_interest_cache();

        let mut rig = Rig::new(CommitPolicy::DeferredToDragEnd);
        rig.feed(PointerSample::start(cell_x(3)));
        rig.feed(PointerSample::end(cell_x(3)));
        rig.feed(PointerSample::start(cell_x(5)));
        rig.feed(PointerSample::cancel());
        // Cancel with nothing in progress logs nothing.
        rig.feed(PointerSample::cancel());

        let snapshot = events.lock().expect("drag trace lock");
        let messages: Vec<&str> = snapshot.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "slider.drag.start",
                "slider.commit",
                "slider.drag.start",
                "slider.drag.cancel",
            ]
        );
        let commit = snapshot
            .iter()
            .find(|e| e.message == "slider.commit")
            .expect("commit event");
        assert_eq!(commit.deferred, Some(true));
        assert_eq!(rig.selection, 45);
    }
}
