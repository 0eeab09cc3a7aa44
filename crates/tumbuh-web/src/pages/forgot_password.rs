//! Forgot Password Page
//!
//! Request form, then a confirmation view once the link is sent. "Kirim
//! Ulang Email" returns to the form with the email kept.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tumbuh_core::form::{ForgotPasswordForm, ResetStage};

use crate::components::AuthCard;
use crate::context::{use_account_client, use_toasts};
use crate::submit::submit_form;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = use_toasts();
    let client = use_account_client();
    let form = RwSignal::new(ForgotPasswordForm::default());
    let submitting = RwSignal::new(false);
    let stage = RwSignal::new(ResetStage::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = client.api();
        submit_form(
            form,
            submitting,
            toasts,
            move |request| async move { api.request_password_reset(&request).await },
            move || {
                stage.try_set(ResetStage::Sent);
            },
        );
    };

    move || match stage.get() {
        ResetStage::Request => view! {
            <AuthCard
                title="Lupa Password?"
                subtitle="Masukkan email Anda dan kami akan mengirim link untuk reset password"
            >
                <form class="form" novalidate on:submit=on_submit>
                    <div class="field">
                        <label for="email">"Email"</label>
                        <div class="input-wrap">
                            <span class="input-icon">"✉️"</span>
                            <input
                                id="email"
                                type="email"
                                class="input with-icon"
                                placeholder="nama@email.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <button type="submit" class="btn btn-primary w-full" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Mengirim..." } else { "Kirim Link Reset" }}
                    </button>
                </form>

                <p class="auth-footer muted">
                    "Ingat password Anda? " <a href="/login">"Masuk di sini"</a>
                </p>
                <p class="auth-footer muted">
                    "Belum punya akun? " <a href="/register">"Daftar gratis"</a>
                </p>
            </AuthCard>
        }
        .into_any(),
        ResetStage::Sent => view! {
            <div class="auth-page">
                <div class="card auth-card reset-sent">
                    <div class="success-badge">"✓"</div>
                    <h1>"Email Terkirim!"</h1>
                    <p class="muted">
                        "Kami telah mengirim link reset password ke "
                        <strong>{move || form.with(|f| f.email.clone())}</strong>
                    </p>
                    <div class="hint-box">
                        <p>"📧 Cek folder email Anda"</p>
                        <p>"⏰ Link akan kadaluarsa dalam 1 jam"</p>
                        <p>"📁 Jika tidak ada, cek folder spam"</p>
                    </div>
                    <button
                        type="button"
                        class="btn btn-outline w-full"
                        on:click=move |_| stage.update(ResetStage::resend)
                    >
                        "Kirim Ulang Email"
                    </button>
                    <a href="/login" class="btn btn-ghost w-full">"← Kembali ke Login"</a>
                </div>
            </div>
        }
        .into_any(),
    }
}
