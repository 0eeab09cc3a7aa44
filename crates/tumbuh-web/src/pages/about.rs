use leptos::prelude::*;

use crate::components::DocumentView;
use crate::content::ABOUT;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="container page">
            <img
                class="banner"
                src="https://images.unsplash.com/photo-1555109307-f7d9da25c244?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=400"
                alt="Pemandangan alam Indonesia yang menggambarkan pertumbuhan dan perkembangan"
            />
            <DocumentView document=ABOUT />
        </div>
    }
}
