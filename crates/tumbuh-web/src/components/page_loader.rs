use leptos::prelude::*;

/// Full-screen overlay shown while a navigation settles
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="page-loader" role="status" aria-live="polite">
            <div class="page-loader-mark">"TI"</div>
            <div class="spinner"></div>
            <p class="muted">"Memuat..."</p>
        </div>
    }
}
