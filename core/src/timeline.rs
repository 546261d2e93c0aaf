use crate::sequence::{ScheduledStep, ThrowSequence};
use crate::timing::ThrowTimings;
use crate::visual::ThrowVisual;

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    due_ms: u64,
    step: ScheduledStep,
}

/// Runs a [`ThrowSequence`] against a simulated clock instead of browser
/// timers. Holds at most one timer, like the browser runtime.
#[derive(Clone, Debug)]
pub struct VirtualTimeline {
    sequence: ThrowSequence,
    now_ms: u64,
    timer: Option<PendingTimer>,
}

impl VirtualTimeline {
    pub fn new(timings: ThrowTimings) -> Self {
        Self {
            sequence: ThrowSequence::new(timings),
            now_ms: 0,
            timer: None,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_throwing(&self) -> bool {
        self.sequence.is_throwing()
    }

    pub fn visual(&self) -> ThrowVisual {
        self.sequence.visual()
    }

    pub fn sequence(&self) -> &ThrowSequence {
        &self.sequence
    }

    pub fn pending_due_ms(&self) -> Option<u64> {
        self.timer.map(|timer| timer.due_ms)
    }

    /// Returns true if the trigger started a throw.
    pub fn trigger(&mut self) -> bool {
        match self.sequence.trigger() {
            Some(step) => {
                self.arm(step);
                true
            }
            None => false,
        }
    }

    /// Moves the clock forward, firing every timer that comes due on the way.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms.saturating_add(ms);
        while let Some(timer) = self.timer {
            if timer.due_ms > target {
                break;
            }
            self.timer = None;
            self.now_ms = timer.due_ms;
            if let Some(next) = self.sequence.complete(timer.step) {
                self.arm(next);
            }
        }
        self.now_ms = target;
    }

    pub fn teardown(&mut self) -> bool {
        self.timer = None;
        self.sequence.teardown()
    }

    fn arm(&mut self, step: ScheduledStep) {
        self.timer = Some(PendingTimer {
            due_ms: self.now_ms.saturating_add(u64::from(step.delay_ms)),
            step,
        });
    }
}

impl Default for VirtualTimeline {
    fn default() -> Self {
        Self::new(ThrowTimings::default())
    }
}
