//! Browser Timers
//!
//! [`Scheduler`] backed by `setTimeout` through gloo.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use tumbuh_core::timer::{self, Task};
use tumbuh_core::{Scheduler, TimerHandle};

/// Schedules tasks on the browser event loop
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

/// Pending `setTimeout`; dropping it also cancels
pub struct GlooTimer(Timeout);

impl TimerHandle for GlooTimer {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn schedule(&self, delay: Duration, task: Task) -> GlooTimer {
        GlooTimer(Timeout::new(timer::millis_u32(delay), task))
    }
}
