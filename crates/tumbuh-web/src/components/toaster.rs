//! Toast Stack

use leptos::prelude::*;
use tumbuh_core::Toast;

use crate::context::use_toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();

    view! {
        <div class="toaster" aria-live="assertive">
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<Toast>>())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.severity.class() role="alert">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Tutup"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
