//! Page-Load Signal
//!
//! Transient flag driving the loading overlay. Every navigation sets it and
//! arms a single reset timer; a newer navigation cancels the pending timer
//! before arming its own, so only the latest navigation decides when the
//! flag clears.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::timer::{Scheduler, TimerHandle};

/// Delay between a navigation and the overlay disappearing
pub const DEFAULT_PAGE_LOAD_DELAY: Duration = Duration::from_millis(500);

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Debug, Default)]
struct LoadState {
    loading: bool,
    /// Bumped on every navigation; a timer only clears the flag it armed
    generation: u64,
}

/// Debounced-per-navigation loading flag
pub struct PageLoadSignal<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    state: Arc<Mutex<LoadState>>,
    pending: Option<S::Handle>,
    listener: Listener,
}

impl<S: Scheduler> PageLoadSignal<S> {
    /// `listener` receives every value written to the flag
    pub fn new(
        scheduler: S,
        delay: Duration,
        listener: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        Self {
            scheduler,
            delay,
            state: Arc::new(Mutex::new(LoadState::default())),
            pending: None,
            listener: Arc::new(listener),
        }
    }

    /// Record a route change: cancel, raise the flag, re-arm
    pub fn navigate(&mut self, path: &str) {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(path, "cancelling pending page-load reset");
            previous.cancel();
        }

        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.loading = true;
            state.generation
        };
        (self.listener)(true);
        tracing::debug!(path, generation, "navigation started");

        let state = Arc::clone(&self.state);
        let listener = Arc::clone(&self.listener);
        self.pending = Some(self.scheduler.schedule(
            self.delay,
            Box::new(move || expire(&state, &listener, generation)),
        ));
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    /// Number of navigations seen so far
    pub fn generation(&self) -> u64 {
        lock(&self.state).generation
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

fn expire(state: &Mutex<LoadState>, listener: &Listener, generation: u64) {
    {
        let mut state = lock(state);
        if state.generation != generation {
            tracing::trace!(generation, current = state.generation, "stale page-load reset ignored");
            return;
        }
        state.loading = false;
    }
    tracing::trace!(generation, "page load finished");
    listener(false);
}

fn lock(state: &Mutex<LoadState>) -> std::sync::MutexGuard<'_, LoadState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TokioScheduler;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_flag_raised_then_cleared_after_delay() {
        let (seen, listener) = recorder();
        let mut signal = PageLoadSignal::new(TokioScheduler, DEFAULT_PAGE_LOAD_DELAY, listener);
        assert!(!signal.is_loading());

        signal.navigate("/about");
        assert!(signal.is_loading());

        wait(499).await;
        assert!(signal.is_loading());

        wait(2).await;
        assert!(!signal.is_loading());
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_navigation_clears_once_after_last() {
        let (seen, listener) = recorder();
        let mut signal = PageLoadSignal::new(TokioScheduler, DEFAULT_PAGE_LOAD_DELAY, listener);

        for path in ["/", "/about", "/features", "/contact", "/login"] {
            signal.navigate(path);
            wait(200).await;
            assert!(signal.is_loading(), "cleared early after {path}");
        }

        // last navigation was 200ms ago
        wait(299).await;
        assert!(signal.is_loading());
        wait(2).await;
        assert!(!signal.is_loading());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.iter().filter(|v| !**v).count(), 1);
        assert_eq!(seen.last(), Some(&false));
        assert_eq!(signal.generation(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_after_expiry_rearms() {
        let (seen, listener) = recorder();
        let mut signal = PageLoadSignal::new(TokioScheduler, DEFAULT_PAGE_LOAD_DELAY, listener);

        signal.navigate("/");
        wait(600).await;
        assert!(!signal.is_loading());

        signal.navigate("/terms");
        assert!(signal.is_loading());
        wait(600).await;
        assert!(!signal.is_loading());
        assert_eq!(*seen.lock().unwrap(), vec![true, false, true, false]);
    }

    #[test]
    fn test_stale_expiry_cannot_clear_newer_navigation() {
        let state = Mutex::new(LoadState { loading: true, generation: 3 });
        let (seen, listener) = recorder();
        let listener: Listener = Arc::new(listener);

        expire(&state, &listener, 2);
        assert!(state.lock().unwrap().loading);
        assert!(seen.lock().unwrap().is_empty());

        expire(&state, &listener, 3);
        assert!(!state.lock().unwrap().loading);
        assert_eq!(*seen.lock().unwrap(), vec![false]);
    }
}
