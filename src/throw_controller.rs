use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use js_sys::Date;
use shuriken_stadium_core::{ScheduledStep, ThrowSequence, ThrowStep, ThrowTimings};
#[cfg(test)]
use shuriken_stadium_core::ThrowVisual;

pub(crate) type ThrowSubscriber = Rc<dyn Fn()>;

/// Browser side of the throw sequence.
///
/// Owns the single pending `Timeout`; replacing or clearing it cancels the
/// browser timer. Callbacks hold a `Weak` so a dropped controller never fires.
pub(crate) struct ThrowController {
    sequence: RefCell<ThrowSequence>,
    timer: RefCell<Option<Timeout>>,
    subscribers: Rc<RefCell<Vec<ThrowSubscriber>>>,
    started_at: Cell<f64>,
    debug: bool,
}

impl ThrowController {
    pub(crate) fn new(timings: ThrowTimings, debug: bool) -> Rc<Self> {
        Rc::new(Self {
            sequence: RefCell::new(ThrowSequence::new(timings)),
            timer: RefCell::new(None),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            started_at: Cell::new(0.0),
            debug,
        })
    }

    pub(crate) fn subscribe(&self, subscriber: ThrowSubscriber) -> ThrowSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        ThrowSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn is_throwing(&self) -> bool {
        self.sequence.borrow().is_throwing()
    }

    #[cfg(test)]
    pub(crate) fn visual(&self) -> ThrowVisual {
        self.sequence.borrow().visual()
    }

    #[cfg(test)]
    pub(crate) fn has_pending_timer(&self) -> bool {
        self.timer.borrow().is_some()
    }

    pub(crate) fn trigger(self: &Rc<Self>) {
        let scheduled = self.sequence.borrow_mut().trigger();
        let Some(step) = scheduled else {
            if self.debug {
                gloo::console::log!("throw ignored: already throwing");
            }
            return;
        };
        self.started_at.set(Date::now());
        if self.debug {
            gloo::console::log!("throw started", step.delay_ms, "ms windup");
        }
        self.arm(step);
        self.notify_subscribers();
    }

    /// Cancels the pending timer and drops back to idle.
    pub(crate) fn shutdown(&self) {
        self.timer.borrow_mut().take();
        let interrupted = self.sequence.borrow_mut().teardown();
        if interrupted && self.debug {
            gloo::console::log!("throw torn down mid-flight");
        }
    }

    fn arm(self: &Rc<Self>, step: ScheduledStep) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(step.delay_ms, move || {
            if let Some(controller) = weak.upgrade() {
                controller.on_timer(step);
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn on_timer(self: &Rc<Self>, done: ScheduledStep) {
        let was_throwing = self.is_throwing();
        let next = self.sequence.borrow_mut().complete(done);
        if let Some(next) = next {
            if self.debug && done.step == ThrowStep::Windup {
                gloo::console::log!("windup done,", next.delay_ms, "ms flight");
            }
            self.arm(next);
            return;
        }
        self.timer.borrow_mut().take();
        if was_throwing && !self.is_throwing() {
            if self.debug {
                let elapsed = Date::now() - self.started_at.get();
                gloo::console::log!("throw finished after", elapsed, "ms");
            }
            self.notify_subscribers();
        }
    }

    fn notify_subscribers(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

impl Drop for ThrowController {
    fn drop(&mut self) {
        self.timer.get_mut().take();
    }
}

pub(crate) struct ThrowSubscription {
    subscriber: ThrowSubscriber,
    subscribers: Rc<RefCell<Vec<ThrowSubscriber>>>,
}

impl Drop for ThrowSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
