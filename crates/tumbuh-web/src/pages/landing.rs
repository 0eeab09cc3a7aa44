//! Landing Page

use leptos::prelude::*;

use crate::components::FeatureCard;
use crate::content::{self, HERO_CHECKS};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <h1>
                            "Satu Link untuk "
                            <span class="gradient-text">"Semua Profil"</span>
                            " Sosial Media"
                        </h1>
                        <p class="lead">
                            "Platform gratis untuk content creator dan brand Indonesia. Buat halaman link-in-bio profesional yang menghubungkan semua akun sosial media Anda dalam satu tempat."
                        </p>
                        <div class="hero-actions">
                            <a href="/register" class="btn btn-primary btn-lg">"Mulai Gratis Sekarang"</a>
                            <a href="/features" class="btn btn-outline btn-lg">"Lihat Contoh"</a>
                        </div>
                        <div class="hero-checks">
                            {HERO_CHECKS
                                .into_iter()
                                .map(|check| view! { <span><span class="check">"✓"</span>{check}</span> })
                                .collect_view()}
                        </div>
                    </div>
                    <img
                        class="hero-image"
                        src="https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600"
                        alt="Content creator Indonesia bekerja dengan laptop dan smartphone"
                    />
                </div>
            </section>

            <section class="container section">
                <div class="section-header">
                    <h2>"Kenapa Memilih Tumbuh Ide?"</h2>
                    <p class="muted">
                        "Dirancang khusus untuk content creator dan brand Indonesia dengan fitur yang mudah digunakan dan tampilan yang profesional."
                    </p>
                </div>
                <div class="feature-grid">
                    {content::highlights()
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
