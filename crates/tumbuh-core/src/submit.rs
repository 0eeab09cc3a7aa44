//! Form Submission Flow
//!
//! A page keeps its field values and an in-flight flag somewhere
//! ([`SubmissionState`]); the flow runs in two steps so the page can hand
//! the API call to its executor in between:
//!
//! 1. [`begin`]: synchronous; ignored while a submission is in flight,
//!    otherwise validates (destructive toast on failure) and marks the
//!    state pending.
//! 2. [`complete`]: awaits the account/content API call, reports the
//!    outcome as a toast, resets the form on success when the form asks
//!    for it, and always clears the pending flag.
//!
//! Every error ends here at the page; nothing propagates to the shell.

use std::future::Future;

use crate::api::ApiResult;
use crate::error::SiteError;
use crate::form::{AfterSubmit, Form};
use crate::notify::{Notice, Notifier, Severity};

/// Request type produced by the form behind `S`
pub type RequestOf<S> = <<S as SubmissionState>::Form as Form>::Request;

/// Where a page stores its form and its in-flight flag
pub trait SubmissionState {
    type Form: Form;

    /// Current field values; `None` once the page is gone
    fn snapshot(&self) -> Option<Self::Form>;

    fn is_pending(&self) -> bool;

    fn set_pending(&self, pending: bool);

    /// Clear every field back to its default
    fn reset_form(&self);
}

/// Start a submission, returning the validated request
pub fn begin<S, N>(state: &S, notifier: &N) -> Option<RequestOf<S>>
where
    S: SubmissionState,
    N: Notifier + ?Sized,
{
    if state.is_pending() {
        tracing::debug!("submission already in flight");
        return None;
    }
    let form = state.snapshot()?;
    let request = validate_or_notify(&form, notifier)?;
    state.set_pending(true);
    Some(request)
}

/// Finish a submission started with [`begin`]
pub async fn complete<S, N, Fut>(state: &S, call: Fut, notifier: &N) -> ApiResult<()>
where
    S: SubmissionState,
    N: Notifier + ?Sized,
    Fut: Future<Output = ApiResult<()>>,
{
    let result = deliver(call, &<S::Form as Form>::SUCCESS, notifier).await;
    if result.is_ok() && <S::Form as Form>::AFTER_SUCCESS == AfterSubmit::Reset {
        state.reset_form();
    }
    state.set_pending(false);
    result
}

/// [`begin`] then [`complete`]; `None` when nothing was sent
pub async fn submit<S, N, C, Fut>(state: &S, notifier: &N, call: C) -> Option<ApiResult<()>>
where
    S: SubmissionState,
    N: Notifier + ?Sized,
    C: FnOnce(RequestOf<S>) -> Fut,
    Fut: Future<Output = ApiResult<()>>,
{
    let request = begin(state, notifier)?;
    Some(complete(state, call(request), notifier).await)
}

/// Validate `form`, notifying on failure
pub fn validate_or_notify<F, N>(form: &F, notifier: &N) -> Option<F::Request>
where
    F: Form,
    N: Notifier + ?Sized,
{
    match form.validate() {
        Ok(request) => Some(request),
        Err(err) => {
            tracing::debug!(error = %err, "submission rejected by validation");
            notifier.error(&SiteError::from(err).user_message());
            None
        }
    }
}

/// Await the API call and announce the result
pub async fn deliver<N, Fut>(call: Fut, success: &Notice, notifier: &N) -> ApiResult<()>
where
    N: Notifier + ?Sized,
    Fut: Future<Output = ApiResult<()>>,
{
    let result = call.await;
    match &result {
        Ok(()) => notifier.success(success),
        Err(err) => {
            tracing::warn!(error = %err, retryable = err.is_retryable(), "submission failed");
            notifier.notify("Gagal", &err.user_message(), Severity::Destructive);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::api::{AccountApi, ApiError, DEFAULT_SUBMIT_DELAY, SimulatedAccountApi};
    use crate::form::{
        ContactForm, ContactMessage, Credentials, ForgotPasswordForm, PasswordResetRequest,
        RegisterForm, RegistrationRequest, ResetStage,
    };
    use crate::loader::{DEFAULT_PAGE_LOAD_DELAY, PageLoadSignal};
    use crate::notify::testing::RecordingNotifier;
    use crate::timer::TokioScheduler;

    /// Counts calls and delegates to the simulation
    struct CountingApi {
        inner: SimulatedAccountApi<TokioScheduler>,
        calls: AtomicUsize,
    }

    impl CountingApi {
        fn new() -> Self {
            Self {
                inner: SimulatedAccountApi::new(TokioScheduler, DEFAULT_SUBMIT_DELAY),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing_with(error: ApiError) -> Self {
            Self {
                inner: SimulatedAccountApi::new(TokioScheduler, DEFAULT_SUBMIT_DELAY)
                    .failing_with(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait(?Send)]
    impl AccountApi for CountingApi {
        async fn register(&self, request: &RegistrationRequest) -> ApiResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.register(request).await
        }

        async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.login(credentials).await
        }

        async fn request_password_reset(&self, request: &PasswordResetRequest) -> ApiResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.request_password_reset(request).await
        }

        async fn submit_contact_message(&self, message: &ContactMessage) -> ApiResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.submit_contact_message(message).await
        }

        fn name(&self) -> &str {
            "Counting"
        }
    }

    /// Page-side storage for a form and its in-flight flag
    struct PageState<F> {
        form: Mutex<F>,
        pending: Mutex<bool>,
    }

    impl<F: Clone> PageState<F> {
        fn new(form: F) -> Self {
            Self { form: Mutex::new(form), pending: Mutex::new(false) }
        }

        fn form(&self) -> F {
            self.form.lock().unwrap().clone()
        }
    }

    impl<F: Form + Clone> SubmissionState for PageState<F> {
        type Form = F;

        fn snapshot(&self) -> Option<F> {
            Some(self.form())
        }

        fn is_pending(&self) -> bool {
            *self.pending.lock().unwrap()
        }

        fn set_pending(&self, pending: bool) {
            *self.pending.lock().unwrap() = pending;
        }

        fn reset_form(&self) {
            self.form.lock().unwrap().reset();
        }
    }

    async fn register(
        state: &PageState<RegisterForm>,
        api: &CountingApi,
        notifier: &RecordingNotifier,
    ) -> Option<ApiResult<()>> {
        submit(state, notifier, |request| async move { api.register(&request).await }).await
    }

    async fn contact(
        state: &PageState<ContactForm>,
        api: &CountingApi,
        notifier: &RecordingNotifier,
    ) -> Option<ApiResult<()>> {
        submit(state, notifier, |message| async move {
            api.submit_contact_message(&message).await
        })
        .await
    }

    fn budi() -> RegisterForm {
        RegisterForm {
            full_name: "Budi".into(),
            email: "budi@example.com".into(),
            password: "password1".into(),
            confirm_password: "password1".into(),
            agree_terms: true,
            ..Default::default()
        }
    }

    fn sari() -> ContactForm {
        ContactForm {
            name: "Sari".into(),
            email: "sari@example.com".into(),
            subject: None,
            message: "Halo!".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_scenario() {
        let api = CountingApi::new();
        let notifier = RecordingNotifier::default();
        let mut loader = PageLoadSignal::new(TokioScheduler, DEFAULT_PAGE_LOAD_DELAY, |_| {});

        loader.navigate("/register");
        let mismatched = RegisterForm { confirm_password: "password2".into(), ..budi() };
        let state = PageState::new(mismatched.clone());

        assert!(register(&state, &api, &notifier).await.is_none());
        assert_eq!(state.form(), mismatched);
        assert!(!state.is_pending());
        assert_eq!(api.calls(), 0);
        assert_eq!(
            notifier.last(),
            Some((
                "Error".into(),
                "Password dan konfirmasi password tidak sama".into(),
                Severity::Destructive
            ))
        );

        state.form.lock().unwrap().confirm_password = "password1".into();
        let start = tokio::time::Instant::now();
        assert_eq!(register(&state, &api, &notifier).await, Some(Ok(())));

        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
        assert_eq!(api.calls(), 1);
        assert_eq!(notifier.count(Severity::Default), 1);
        assert_eq!(
            notifier.last().map(|(title, _, _)| title),
            Some("Registrasi Berhasil!".into())
        );
        assert_eq!(state.form(), RegisterForm::default());
        assert!(!state.is_pending());
        assert!(!loader.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_pending_is_ignored() {
        let api = CountingApi::new();
        let notifier = RecordingNotifier::default();
        let state = PageState::new(budi());

        let (first, second) = futures::join!(
            register(&state, &api, &notifier),
            register(&state, &api, &notifier)
        );

        assert_eq!(first, Some(Ok(())));
        assert_eq!(second, None);
        assert_eq!(api.calls(), 1);
        assert_eq!(notifier.seen.lock().unwrap().len(), 1);
        assert!(!state.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_state_blocks_without_toast() {
        let api = CountingApi::new();
        let notifier = RecordingNotifier::default();
        let state = PageState::new(budi());
        state.set_pending(true);

        assert!(register(&state, &api, &notifier).await.is_none());
        assert_eq!(api.calls(), 0);
        assert!(notifier.seen.lock().unwrap().is_empty());
        assert!(state.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_terms_rejection_never_calls_api() {
        let api = CountingApi::new();
        let notifier = RecordingNotifier::default();
        let state = PageState::new(RegisterForm { agree_terms: false, ..budi() });

        assert!(register(&state, &api, &notifier).await.is_none());
        assert_eq!(api.calls(), 0);
        assert_eq!(notifier.count(Severity::Default), 0);
        assert_eq!(notifier.count(Severity::Destructive), 1);
        assert!(!state.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_one_call_one_toast() {
        let api = CountingApi::new();
        let notifier = RecordingNotifier::default();
        let state = PageState::new(sari());

        assert_eq!(contact(&state, &api, &notifier).await, Some(Ok(())));

        assert_eq!(api.calls(), 1);
        assert_eq!(notifier.seen.lock().unwrap().len(), 1);
        assert_eq!(notifier.count(Severity::Default), 1);
        assert_eq!(state.form(), ContactForm::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_forgot_password_confirm_keeps_email_then_resend() {
        let api = CountingApi::new();
        let notifier = RecordingNotifier::default();
        let state = PageState::new(ForgotPasswordForm { email: "budi@example.com".into() });
        let api = &api;

        let result = submit(&state, &notifier, |request| async move {
            api.request_password_reset(&request).await
        })
        .await;
        assert_eq!(result, Some(Ok(())));
        assert_eq!(state.form().email, "budi@example.com");
        assert!(!state.is_pending());

        let mut stage = ResetStage::Sent;
        stage.resend();
        assert_eq!(stage, ResetStage::Request);
        assert_eq!(state.form().email, "budi@example.com");
        assert_eq!(api.calls(), 1);
        assert_eq!(notifier.count(Severity::Default), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_api_failure_keeps_fields_and_allows_resubmit() {
        let api = CountingApi::failing_with(ApiError::Network("offline".into()));
        let notifier = RecordingNotifier::default();
        let state = PageState::new(sari());

        let result = contact(&state, &api, &notifier).await;

        assert_eq!(result, Some(Err(ApiError::Network("offline".into()))));
        assert_eq!(state.form(), sari());
        assert!(!state.is_pending());
        let (title, _, severity) = notifier.last().unwrap();
        assert_eq!(title, "Gagal");
        assert_eq!(severity, Severity::Destructive);

        assert!(contact(&state, &api, &notifier).await.is_some());
        assert_eq!(api.calls(), 2);
        assert_eq!(notifier.count(Severity::Destructive), 2);
    }
}
