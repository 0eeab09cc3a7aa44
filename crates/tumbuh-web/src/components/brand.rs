//! Logo mark and wordmark

use leptos::prelude::*;

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <a href="/" class="brand">
            <span class="brand-mark">"TI"</span>
            <span class="brand-name">"Tumbuh Ide"</span>
        </a>
    }
}
