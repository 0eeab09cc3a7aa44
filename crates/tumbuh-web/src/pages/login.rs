//! Login Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tumbuh_core::form::LoginForm;

use crate::components::{AuthCard, PasswordField};
use crate::context::{use_account_client, use_toasts};
use crate::submit::submit_form;

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = use_toasts();
    let client = use_account_client();
    let form = RwSignal::new(LoginForm::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = client.api();
        submit_form(
            form,
            submitting,
            toasts,
            move |credentials| async move { api.login(&credentials).await },
            || {},
        );
    };

    view! {
        <AuthCard title="Masuk" subtitle="Selamat datang kembali! Masuk ke akun Tumbuh Ide Anda">
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

                <div class="field">
                    <label for="password">"Password"</label>
                    <PasswordField
                        id="password"
                        placeholder="Password Anda"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |value| form.update(|f| f.password = value))
                    />
                </div>

                <div class="form-row">
                    <label class="checkbox-row">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.remember)
                            on:change=move |ev| form.update(|f| f.remember = event_target_checked(&ev))
                        />
                        "Ingat saya"
                    </label>
                    <a href="/forgot-password">"Lupa password?"</a>
                </div>

                <button type="submit" class="btn btn-primary w-full" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Masuk..." } else { "Masuk" }}
                </button>
            </form>

            <p class="auth-footer muted">
                "Belum punya akun? " <a href="/register">"Daftar gratis"</a>
            </p>
        </AuthCard>
    }
}
