//! Shared Context
//!
//! Copyable handles the shell provides and pages pull with `use_*`.

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tumbuh_core::timer::millis_u32;
use tumbuh_core::{AccountApi, Notifier, Severity, SiteConfig, ToastId, ToastQueue};

// ============================================================================
// Toasts
// ============================================================================

/// Global toast surface
///
/// Lives at the shell, so toasts raised by a page outlive the page.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(config.toast_limit, config.toast_duration())),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

impl Notifier for Toasts {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        let Some(id) = self.queue.try_update(|queue| queue.push(title, description, severity)) else {
            return;
        };
        let lifetime = self.queue.with_untracked(ToastQueue::lifetime);
        let queue = self.queue;
        Timeout::new(millis_u32(lifetime), move || {
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

// ============================================================================
// Account API
// ============================================================================

/// Handle to the account/content backend chosen at startup
#[derive(Clone, Copy)]
pub struct AccountClient {
    api: StoredValue<Arc<dyn AccountApi>>,
}

impl AccountClient {
    pub fn new(api: Arc<dyn AccountApi>) -> Self {
        Self {
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> Arc<dyn AccountApi> {
        self.api.get_value()
    }
}

// ============================================================================
// Provide / use
// ============================================================================

/// Install the site-wide context; call once under the root component
pub fn provide_site_context(config: SiteConfig, api: Arc<dyn AccountApi>) {
    tracing::info!(backend = api.name(), "account backend selected");
    provide_context(Toasts::new(&config));
    provide_context(AccountClient::new(api));
    provide_context(config);
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

pub fn use_account_client() -> AccountClient {
    expect_context::<AccountClient>()
}

pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}
