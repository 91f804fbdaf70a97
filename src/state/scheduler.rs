// Cancellable scheduled tasks driving the countdown and the pop-up loop.
use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;

/// Work a timer hands back to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Once-per-second countdown tick.
    CountdownTick,
    /// The shown target's delay is over.
    PopupElapsed,
}

/// Arms timers that report back with a [`Task`].
///
/// Handles cancel their timer when dropped, so holding an `Option<Handle>`
/// and calling `take()` is the whole cancellation story.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, task: Task) -> Self::Handle;
    fn after(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// `setInterval` / `setTimeout` backed scheduler.
#[derive(Clone)]
pub struct BrowserScheduler {
    dispatch: Rc<dyn Fn(Task)>,
}

impl BrowserScheduler {
    pub fn new(dispatch: impl Fn(Task) + 'static) -> Self {
        Self {
            dispatch: Rc::new(dispatch),
        }
    }
}

// only held for its Drop, which clears the timer
#[allow(dead_code)]
pub enum BrowserHandle {
    Repeating(Interval),
    Once(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn every(&self, period_ms: u32, task: Task) -> BrowserHandle {
        let dispatch = self.dispatch.clone();
        BrowserHandle::Repeating(Interval::new(period_ms, move || dispatch(task)))
    }

    fn after(&self, delay_ms: u32, task: Task) -> BrowserHandle {
        let dispatch = self.dispatch.clone();
        BrowserHandle::Once(Timeout::new(delay_ms, move || dispatch(task)))
    }
}
