//! Cancellable one-shot timers

use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Handle to a scheduled callback
pub trait TimerHandle {
    /// Stop the callback from running if it has not fired yet
    fn cancel(self);
}

/// Something that can run a callback once after a delay
pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

/// Browser timers backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Pending browser timeout. Dropping it also clears the timer.
pub struct BrowserTimeout(Timeout);

impl TimerHandle for BrowserTimeout {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        BrowserTimeout(Timeout::new(millis, callback))
    }
}
