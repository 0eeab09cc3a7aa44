//! Terms and Privacy Pages

use leptos::prelude::*;

use crate::components::DocumentView;
use crate::content::{PRIVACY, TERMS};

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="container page">
            <DocumentView document=TERMS />
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="container page">
            <DocumentView document=PRIVACY />
        </div>
    }
}
