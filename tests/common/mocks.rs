//! Deterministic timers for driving the login controller in tests.
//!
//! Time only moves when a test calls [`ManualScheduler::advance`], so the
//! simulated submission delay can be stepped through exactly.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use welcome_login::timer::{Scheduler, TimerHandle};

struct Entry {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Timers {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
    cancelled: usize,
    honor_cancel: bool,
}

/// Scheduler whose clock is advanced by hand.
///
/// Clones share the same clock and timer queue, so a test can keep one
/// clone while the controller owns another.
#[derive(Clone)]
pub struct ManualScheduler {
    timers: Rc<RefCell<Timers>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            timers: Rc::new(RefCell::new(Timers {
                honor_cancel: true,
                ..Default::default()
            })),
        }
    }

    /// A scheduler that records cancellations but still fires the
    /// callbacks, like a timer that raced its own cancellation.
    pub fn ignoring_cancel() -> Self {
        let scheduler = Self::new();
        scheduler.timers.borrow_mut().honor_cancel = false;
        scheduler
    }

    /// Number of callbacks waiting to fire
    pub fn pending(&self) -> usize {
        self.timers.borrow().entries.len()
    }

    /// Number of `cancel` calls received
    pub fn cancelled(&self) -> usize {
        self.timers.borrow().cancelled
    }

    /// Move the clock forward and run every callback that became due
    pub fn advance(&self, by: Duration) {
        let due = {
            let mut timers = self.timers.borrow_mut();
            timers.now += by;
            let now = timers.now;
            let (due, waiting): (Vec<Entry>, Vec<Entry>) =
                timers.entries.drain(..).partition(|entry| entry.due <= now);
            timers.entries = waiting;
            due
        };

        for entry in due {
            (entry.callback)();
        }
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ManualHandle {
    id: u64,
    timers: Weak<RefCell<Timers>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(timers) = self.timers.upgrade() {
            let mut timers = timers.borrow_mut();
            timers.cancelled += 1;
            if timers.honor_cancel {
                timers.entries.retain(|entry| entry.id != self.id);
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Self::Handle {
        let mut timers = self.timers.borrow_mut();
        timers.next_id += 1;
        let id = timers.next_id;
        let due = timers.now + delay;
        timers.entries.push(Entry { id, due, callback });

        ManualHandle {
            id,
            timers: Rc::downgrade(&self.timers),
        }
    }
}
