//! Stepper (multi-step form) state machine.
//!
//! Linear steppers only allow forward jumps to steps already reachable by
//! sequential advancement. The rule lives in [`StepperState::go_to`] itself,
//! not in whatever control the renderer disables.

use crate::model::StepperEvent;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Stepper position and per-step progress.
///
/// # Invariants
/// - `active < step_count` whenever `step_count > 0`.
/// - A step is never both completed and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperState {
    active: usize,
    step_count: usize,
    linear: bool,
    optional: BTreeSet<usize>,
    completed: BTreeSet<usize>,
    skipped: BTreeSet<usize>,
    finished: bool,
}

impl StepperState {
    /// Stepper on the first of `step_count` steps.
    pub fn new(step_count: usize, linear: bool) -> Self {
        Self {
            active: 0,
            step_count,
            linear,
            optional: BTreeSet::new(),
            completed: BTreeSet::new(),
            skipped: BTreeSet::new(),
            finished: false,
        }
    }

    /// Builder: mark steps as optional (skippable). Out-of-range indices are
    /// ignored.
    pub fn with_optional(mut self, steps: impl IntoIterator<Item = usize>) -> Self {
        let count = self.step_count;
        let in_range = steps.into_iter().filter(|&s| s < count);
        self.optional.extend(in_range);
        self
    }

    /// Active step, `None` for an empty stepper.
    pub fn active(&self) -> Option<usize> {
        (self.step_count > 0).then_some(self.active)
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether forward jumps are restricted.
    pub fn is_linear(&self) -> bool {
        self.linear
    }

    /// Switch linear mode.
    pub fn set_linear(&mut self, linear: bool) {
        self.linear = linear;
    }

    /// Whether `step` may be skipped.
    pub fn is_optional(&self, step: usize) -> bool {
        self.optional.contains(&step)
    }

    /// Whether `step` was completed.
    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    /// Whether `step` was skipped.
    pub fn is_skipped(&self, step: usize) -> bool {
        self.skipped.contains(&step)
    }

    /// Whether the final step was completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the active step is the last one.
    pub fn is_last(&self) -> bool {
        self.step_count > 0 && self.active == self.step_count - 1
    }

    /// Whether `step` can be reached by sequential advancement: every step
    /// before it is completed or skipped.
    pub fn is_reachable(&self, step: usize) -> bool {
        step < self.step_count
            && (0..step).all(|s| self.completed.contains(&s) || self.skipped.contains(&s))
    }

    /// Complete the active step and advance. Fails on the last step.
    pub fn advance(&mut self) -> Option<StepperEvent> {
        if self.step_count == 0 || self.active + 1 >= self.step_count {
            trace!(active = self.active, "next rejected at last step");
            return None;
        }
        self.skipped.remove(&self.active);
        self.completed.insert(self.active);
        self.move_to(self.active + 1)
    }

    /// Go back one step. Fails on the first step.
    pub fn back(&mut self) -> Option<StepperEvent> {
        if self.active == 0 {
            trace!("back rejected at first step");
            return None;
        }
        self.move_to(self.active - 1)
    }

    /// Skip the active optional step and advance.
    pub fn skip(&mut self) -> Option<StepperEvent> {
        if !self.is_optional(self.active) || self.active + 1 >= self.step_count {
            trace!(active = self.active, "skip rejected");
            return None;
        }
        self.completed.remove(&self.active);
        self.skipped.insert(self.active);
        self.move_to(self.active + 1)
    }

    /// Jump directly to `step`.
    ///
    /// Rejected (no-op) when out of range, already active, or, in linear
    /// mode, ahead of the active step and not yet reachable.
    pub fn go_to(&mut self, step: usize) -> Option<StepperEvent> {
        if step >= self.step_count || step == self.active {
            return None;
        }
        if self.linear && step > self.active && !self.is_reachable(step) {
            trace!(
                step,
                active = self.active,
                "Forward jump rejected in linear mode"
            );
            return None;
        }
        self.move_to(step)
    }

    /// Complete the last step.
    pub fn finish(&mut self) -> Option<StepperEvent> {
        if !self.is_last() || self.finished {
            return None;
        }
        if self.linear && !self.is_reachable(self.active) {
            return None;
        }
        self.skipped.remove(&self.active);
        self.completed.insert(self.active);
        self.finished = true;
        debug!(steps = self.step_count, "Stepper finished");
        Some(StepperEvent::Finished)
    }

    /// Back to the first step with no progress.
    pub fn reset(&mut self) {
        self.active = 0;
        self.completed.clear();
        self.skipped.clear();
        self.finished = false;
    }

    fn move_to(&mut self, step: usize) -> Option<StepperEvent> {
        self.active = step;
        self.finished = false;
        debug!(step, "Stepper moved");
        Some(StepperEvent::StepChanged { index: step })
    }
}
