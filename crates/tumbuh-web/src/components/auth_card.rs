use leptos::prelude::*;

/// Centered card framing the account forms
#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-header">
                    <div class="brand-mark brand-mark-lg">"TI"</div>
                    <h1>{title}</h1>
                    <p class="muted">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
