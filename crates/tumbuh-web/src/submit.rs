//! Page Submission Glue
//!
//! Runs the core submission flow against page signals. Results that
//! arrive after the page unmounted only reach the global toasts; page
//! state updates use `try_*` and are dropped.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tumbuh_core::submit::{begin, complete};
use tumbuh_core::{ApiResult, Form, SubmissionState};

use crate::context::Toasts;

/// A page's form signal paired with its "submitting" flag
struct PageForm<F: Send + Sync + 'static> {
    form: RwSignal<F>,
    submitting: RwSignal<bool>,
}

impl<F: Send + Sync + 'static> Clone for PageForm<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for PageForm<F> {}

impl<F> SubmissionState for PageForm<F>
where
    F: Form + Clone + Send + Sync + 'static,
{
    type Form = F;

    fn snapshot(&self) -> Option<F> {
        self.form.try_get_untracked()
    }

    fn is_pending(&self) -> bool {
        // A disposed page accepts nothing.
        self.submitting.try_get_untracked().unwrap_or(true)
    }

    fn set_pending(&self, pending: bool) {
        self.submitting.try_set(pending);
    }

    fn reset_form(&self) {
        self.form.try_update(F::reset);
    }
}

/// Validate `form` and, if valid, run `call` in the background
///
/// A second submit while `submitting` is set is ignored. `on_success`
/// runs after the form has been reset or kept as the form requires.
pub fn submit_form<F, C, Fut>(
    form: RwSignal<F>,
    submitting: RwSignal<bool>,
    toasts: Toasts,
    call: C,
    on_success: impl FnOnce() + 'static,
) where
    F: Form + Clone + Send + Sync + 'static,
    F::Request: 'static,
    C: FnOnce(F::Request) -> Fut + 'static,
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    let state = PageForm { form, submitting };
    let Some(request) = begin(&state, &toasts) else {
        return;
    };

    spawn_local(async move {
        if complete(&state, call(request), &toasts).await.is_ok() {
            on_success();
        }
    });
}
