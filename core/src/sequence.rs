use crate::timing::ThrowTimings;
use crate::visual::ThrowVisual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowStep {
    Windup,
    Flight,
}

/// A timer the host has to run. Once `delay_ms` has elapsed, hand it back
/// to [`ThrowSequence::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub step: ThrowStep,
    pub delay_ms: u32,
    pub generation: u64,
}

/// Idle/busy state of the throw button.
///
/// The only visible state is `is_throwing`. `pending` tracks which timer is
/// outstanding, and `generation` changes on every start and teardown so that
/// a timer left over from an earlier sequence cannot finish the current one.
#[derive(Clone, Debug)]
pub struct ThrowSequence {
    timings: ThrowTimings,
    is_throwing: bool,
    pending: Option<ThrowStep>,
    generation: u64,
}

impl ThrowSequence {
    pub fn new(timings: ThrowTimings) -> Self {
        Self {
            timings,
            is_throwing: false,
            pending: None,
            generation: 0,
        }
    }

    pub fn timings(&self) -> ThrowTimings {
        self.timings
    }

    pub fn is_throwing(&self) -> bool {
        self.is_throwing
    }

    pub fn pending(&self) -> Option<ThrowStep> {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn visual(&self) -> ThrowVisual {
        ThrowVisual::from_flag(self.is_throwing)
    }

    /// Starts a throw. Returns `None` while a throw is already running.
    pub fn trigger(&mut self) -> Option<ScheduledStep> {
        if self.is_throwing {
            return None;
        }
        self.is_throwing = true;
        self.generation = self.generation.wrapping_add(1);
        Some(self.schedule(ThrowStep::Windup, self.timings.windup_ms))
    }

    /// Reports an elapsed timer. Returns the next timer to run, if any.
    pub fn complete(&mut self, done: ScheduledStep) -> Option<ScheduledStep> {
        if !self.is_live(&done) {
            return None;
        }
        match done.step {
            ThrowStep::Windup => Some(self.schedule(ThrowStep::Flight, self.timings.flight_ms)),
            ThrowStep::Flight => {
                self.pending = None;
                self.is_throwing = false;
                None
            }
        }
    }

    /// Drops any running throw. Returns true if one was interrupted.
    pub fn teardown(&mut self) -> bool {
        let interrupted = self.is_throwing;
        self.is_throwing = false;
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        interrupted
    }

    fn is_live(&self, done: &ScheduledStep) -> bool {
        self.is_throwing && done.generation == self.generation && self.pending == Some(done.step)
    }

    fn schedule(&mut self, step: ThrowStep, delay_ms: u32) -> ScheduledStep {
        self.pending = Some(step);
        ScheduledStep {
            step,
            delay_ms,
            generation: self.generation,
        }
    }
}

impl Default for ThrowSequence {
    fn default() -> Self {
        Self::new(ThrowTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_from_idle_schedules_windup() {
        let mut seq = ThrowSequence::default();
        let step = seq.trigger().expect("idle trigger starts a throw");
        assert!(seq.is_throwing());
        assert_eq!(step.step, ThrowStep::Windup);
        assert_eq!(step.delay_ms, 300);
        assert_eq!(step.generation, seq.generation());
    }

    #[test]
    fn trigger_while_busy_is_ignored() {
        let mut seq = ThrowSequence::default();
        let first = seq.trigger().unwrap();
        let generation = seq.generation();
        assert!(seq.trigger().is_none());
        assert!(seq.is_throwing());
        assert_eq!(seq.generation(), generation);
        assert_eq!(seq.pending(), Some(first.step));
    }

    #[test]
    fn windup_chains_into_flight_then_idle() {
        let mut seq = ThrowSequence::default();
        let windup = seq.trigger().unwrap();
        let flight = seq.complete(windup).expect("windup schedules flight");
        assert_eq!(flight.step, ThrowStep::Flight);
        assert_eq!(flight.delay_ms, 600);
        assert!(seq.is_throwing());

        assert!(seq.complete(flight).is_none());
        assert!(!seq.is_throwing());
        assert_eq!(seq.pending(), None);
    }

    #[test]
    fn out_of_order_report_is_ignored() {
        let mut seq = ThrowSequence::default();
        let windup = seq.trigger().unwrap();
        let bogus = ScheduledStep {
            step: ThrowStep::Flight,
            ..windup
        };
        assert!(seq.complete(bogus).is_none());
        assert!(seq.is_throwing());
        assert_eq!(seq.pending(), Some(ThrowStep::Windup));
    }

    #[test]
    fn teardown_makes_pending_timer_stale() {
        let mut seq = ThrowSequence::default();
        let windup = seq.trigger().unwrap();
        assert!(seq.teardown());
        assert!(!seq.is_throwing());

        assert!(seq.complete(windup).is_none());
        assert!(!seq.is_throwing());
        assert!(!seq.teardown());
    }

    #[test]
    fn old_generation_cannot_finish_new_throw() {
        let mut seq = ThrowSequence::default();
        let stale = seq.trigger().unwrap();
        seq.teardown();
        let fresh = seq.trigger().unwrap();
        assert_ne!(stale.generation, fresh.generation);

        assert!(seq.complete(stale).is_none());
        assert!(seq.is_throwing());
        assert_eq!(seq.pending(), Some(ThrowStep::Windup));
    }
}
