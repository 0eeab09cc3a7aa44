//! Contact Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tumbuh_core::form::{ContactForm, Subject};

use crate::content::{CONTACT_CHANNELS, Channel, SOCIAL_LINKS};
use crate::context::{use_account_client, use_toasts};
use crate::submit::submit_form;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_toasts();
    let client = use_account_client();
    let form = RwSignal::new(ContactForm::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let api = client.api();
        submit_form(
            form,
            submitting,
            toasts,
            move |message| async move { api.submit_contact_message(&message).await },
            || {},
        );
    };

    view! {
        <div class="container page">
            <div class="section-header">
                <h1>"Hubungi Kami"</h1>
                <p class="lead">"Tim kami siap membantu Anda 24/7. Jangan ragu untuk menghubungi kami!"</p>
            </div>

            <div class="contact-grid">
                <aside class="card">
                    <h2>"Informasi Kontak"</h2>
                    {CONTACT_CHANNELS.into_iter().map(channel_view).collect_view()}

                    <h3>"Ikuti Kami"</h3>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|name| view! { <a href="#" class="social-link" aria-label=name>{name}</a> })
                            .collect_view()}
                    </div>
                </aside>

                <form class="card form" novalidate on:submit=on_submit>
                    <div class="field">
                        <label for="name">"Nama Lengkap *"</label>
                        <input
                            id="name"
                            class="input"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="field">
                        <label for="email">"Email *"</label>
                        <input
                            id="email"
                            type="email"
                            class="input"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="field">
                        <label for="subject">"Subjek"</label>
                        <select
                            id="subject"
                            class="input"
                            prop:value=move || form.with(|f| f.subject.map_or("", Subject::value))
                            on:change=move |ev| {
                                form.update(|f| f.subject = Subject::from_value(&event_target_value(&ev)));
                            }
                        >
                            <option value="">"Pilih subjek"</option>
                            {Subject::ALL
                                .into_iter()
                                .map(|subject| view! { <option value=subject.value()>{subject.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="field">
                        <label for="message">"Pesan *"</label>
                        <textarea
                            id="message"
                            class="input"
                            rows="5"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-primary w-full" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Mengirim..." } else { "Kirim Pesan" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

fn channel_view(channel: Channel) -> impl IntoView {
    view! {
        <div class="contact-channel">
            <span class="contact-icon">{channel.icon}</span>
            <div>
                <h3>{channel.title}</h3>
                {channel.lines.iter().map(|line| view! { <p class="muted">{*line}</p> }).collect_view()}
            </div>
        </div>
    }
}
