use chrono::Datelike;
use leptos::prelude::*;

use super::Brand;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <Brand />
                    <p class="muted">
                        "Platform link-in-bio gratis untuk content creator dan brand Indonesia."
                    </p>
                </div>
                <div>
                    <h4>"Produk"</h4>
                    <a href="/features">"Fitur"</a>
                    <a href="/register">"Daftar Gratis"</a>
                </div>
                <div>
                    <h4>"Perusahaan"</h4>
                    <a href="/about">"Tentang"</a>
                    <a href="/contact">"Kontak"</a>
                </div>
                <div>
                    <h4>"Legal"</h4>
                    <a href="/terms">"Syarat & Ketentuan"</a>
                    <a href="/privacy">"Kebijakan Privasi"</a>
                </div>
            </div>
            <p class="container footer-copy muted">
                {format!("© {year} Tumbuh Ide Indonesia. Dibuat dengan ❤️ di Surabaya.")}
            </p>
        </footer>
    }
}
