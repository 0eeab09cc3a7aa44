//! Register Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tumbuh_core::form::{City, RegisterForm, Role};

use crate::components::{AuthCard, PasswordField};
use crate::context::{use_account_client, use_toasts};
use crate::submit::submit_form;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let client = use_account_client();
    let form = RwSignal::new(RegisterForm::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = client.api();
        submit_form(
            form,
            submitting,
            toasts,
            move |request| async move { api.register(&request).await },
            || {},
        );
    };

    view! {
        <AuthCard title="Daftar Gratis" subtitle="Buat akun untuk mulai membangun presence digital Anda">
            <form class="form" novalidate on:submit=on_submit>
                <div class="field">
                    <label for="fullName">"Nama Lengkap"</label>
                    <div class="input-wrap">
                        <span class="input-icon">"👤"</span>
                        <input
                            id="fullName"
                            class="input with-icon"
                            placeholder="Nama lengkap Anda"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                    </div>
                </div>

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
                    <label for="role">"Saya adalah"</label>
                    <select
                        id="role"
                        class="input"
                        prop:value=move || form.with(|f| f.role.map_or("", Role::value))
                        on:change=move |ev| {
                            form.update(|f| f.role = Role::from_value(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"Pilih peran Anda"</option>
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.value()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label for="location">"Lokasi"</label>
                    <select
                        id="location"
                        class="input"
                        prop:value=move || form.with(|f| f.location.map_or("", City::value))
                        on:change=move |ev| {
                            form.update(|f| f.location = City::from_value(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"Pilih kota Anda"</option>
                        {City::ALL
                            .into_iter()
                            .map(|city| view! { <option value=city.value()>{city.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label for="password">"Password"</label>
                    <PasswordField
                        id="password"
                        placeholder="Minimal 8 karakter"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |value| form.update(|f| f.password = value))
                    />
                </div>

                <div class="field">
                    <label for="confirmPassword">"Konfirmasi Password"</label>
                    <PasswordField
                        id="confirmPassword"
                        placeholder="Ulangi password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=Callback::new(move |value| form.update(|f| f.confirm_password = value))
                    />
                </div>

                <div class="checkbox-row">
                    <input
                        id="terms"
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.agree_terms)
                        on:change=move |ev| form.update(|f| f.agree_terms = event_target_checked(&ev))
                    />
                    <label for="terms">
                        "Saya setuju dengan "
                        <a href="/terms">"Syarat & Ketentuan"</a>
                        " dan "
                        <a href="/privacy">"Kebijakan Privasi"</a>
                    </label>
                </div>

                <button type="submit" class="btn btn-primary w-full" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Mendaftarkan..." } else { "Daftar Gratis" }}
                </button>
            </form>

            <p class="auth-footer muted">
                "Sudah punya akun? " <a href="/login">"Masuk di sini"</a>
            </p>
        </AuthCard>
    }
}
