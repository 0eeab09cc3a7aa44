//! Notification Surface
//!
//! Pages only see the [`Notifier`] capability; the shell owns the
//! [`ToastQueue`] that backs it.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Toast styling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    /// Failure styling
    Destructive,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Default => "toast",
            Severity::Destructive => "toast toast-destructive",
        }
    }
}

/// Static title/description pair for a known outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

/// Narrow capability handed to pages
pub trait Notifier {
    fn notify(&self, title: &str, description: &str, severity: Severity);

    fn success(&self, notice: &Notice) {
        self.notify(notice.title, notice.description, Severity::Default);
    }

    fn error(&self, description: &str) {
        self.notify("Error", description, Severity::Destructive);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(u64);

/// A message currently on screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Stacked toasts, newest first, capped at `limit`
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(5000))
    }
}

impl ToastQueue {
    pub fn new(limit: usize, lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            limit: limit.max(1),
            lifetime,
        }
    }

    /// Push a toast on top of the stack, evicting the oldest past the limit
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_front(Toast {
            id,
            title: title.into(),
            description: description.into(),
            severity,
        });
        self.toasts.truncate(self.limit);
        id
    }

    /// Remove a toast; `false` if it was already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// How long a toast stays before auto-dismissal
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{Notifier, Severity};

    /// Records every notification
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub seen: Mutex<Vec<(String, String, Severity)>>,
    }

    impl RecordingNotifier {
        pub fn count(&self, severity: Severity) -> usize {
            self.seen.lock().unwrap().iter().filter(|(_, _, s)| *s == severity).count()
        }

        pub fn last(&self) -> Option<(String, String, Severity)> {
            self.seen.lock().unwrap().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, description: &str, severity: Severity) {
            self.seen
                .lock()
                .unwrap()
                .push((title.into(), description.into(), severity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_capped() {
        let mut queue = ToastQueue::new(2, Duration::from_secs(1));
        queue.push("a", "", Severity::Default);
        queue.push("b", "", Severity::Default);
        queue.push("c", "", Severity::Destructive);

        let titles: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let first = queue.push("a", "x", Severity::Default);
        let second = queue.push("b", "y", Severity::Default);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
        assert!(queue.dismiss(second));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_never_reused_after_eviction() {
        let mut queue = ToastQueue::new(1, Duration::from_secs(1));
        let a = queue.push("a", "", Severity::Default);
        let b = queue.push("b", "", Severity::Default);
        assert_ne!(a, b);
        assert!(!queue.dismiss(a));
    }

    #[test]
    fn test_notifier_helpers() {
        let notifier = testing::RecordingNotifier::default();
        notifier.error("Password dan konfirmasi password tidak sama");
        notifier.success(&Notice { title: "OK", description: "done" });

        assert_eq!(notifier.count(Severity::Destructive), 1);
        assert_eq!(
            notifier.last(),
            Some(("OK".into(), "done".into(), Severity::Default))
        );
    }
}
