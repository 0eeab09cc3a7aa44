use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container page not-found">
            <div class="card">
                <h1>"404 Halaman Tidak Ditemukan"</h1>
                <p class="muted">"Halaman yang Anda cari tidak ada atau sudah dipindahkan."</p>
                <a href="/" class="btn btn-primary">"Kembali ke Beranda"</a>
            </div>
        </div>
    }
}
