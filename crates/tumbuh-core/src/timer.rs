//! Timer Strategy
//!
//! One-shot timers behind a trait so the page-load signal and the simulated
//! API run unchanged on the browser event loop and on tokio.

use std::time::Duration;

use futures::channel::oneshot;

/// Callback run when a timer fires
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to an armed timer
pub trait TimerHandle {
    /// Prevent the timer from firing. No-op if it already fired.
    fn cancel(self);
}

/// Arms one-shot timers
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Run `task` once after `delay`. The timer stays armed as long as the
    /// returned handle is alive on backends that cancel on drop.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

/// Suspend for `delay` using the scheduler's clock
pub async fn sleep<S: Scheduler + ?Sized>(scheduler: &S, delay: Duration) {
    let (tx, rx) = oneshot::channel();
    let _handle = scheduler.schedule(
        delay,
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    let _ = rx.await;
}

/// Millisecond count clamped into the `u32` range browser timers accept
pub fn millis_u32(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(any(test, feature = "tokio"))]
pub use self::tokio_backend::{TokioScheduler, TokioTimer};

#[cfg(any(test, feature = "tokio"))]
mod tokio_backend {
    use std::time::Duration;

    use super::{Scheduler, Task, TimerHandle};

    /// Scheduler backed by the ambient tokio runtime
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TokioScheduler;

    #[derive(Debug)]
    pub struct TokioTimer(tokio::task::JoinHandle<()>);

    impl TimerHandle for TokioTimer {
        fn cancel(self) {
            self.0.abort();
        }
    }

    impl Scheduler for TokioScheduler {
        type Handle = TokioTimer;

        fn schedule(&self, delay: Duration, task: Task) -> TokioTimer {
            TokioTimer(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                task();
            }))
        }
    }
}
