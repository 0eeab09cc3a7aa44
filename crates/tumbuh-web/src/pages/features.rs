//! Features Page

use leptos::prelude::*;

use crate::components::FeatureCard;
use crate::content::FEATURES;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="container page">
            <div class="section-header">
                <h1>"Fitur Lengkap untuk " <span class="gradient-text">"Content Creator"</span></h1>
                <p class="lead">
                    "Semua yang Anda butuhkan untuk membangun presence digital yang kuat dan profesional dalam satu platform."
                </p>
            </div>

            <div class="feature-grid">
                {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
            </div>

            <section class="cta-band">
                <h2>"Siap Memulai Journey Digital Anda?"</h2>
                <p>"Bergabung dengan ribuan content creator dan brand Indonesia yang sudah mempercayai Tumbuh Ide."</p>
                <a href="/register" class="btn btn-primary btn-lg">"Daftar Gratis"</a>
            </section>
        </div>
    }
}
