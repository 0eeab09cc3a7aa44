//! Bottom navigation bar for small screens

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use tumbuh_core::{NavItem, PRIMARY_NAV};

#[component]
pub fn MobileNav() -> impl IntoView {
    let pathname = use_location().pathname;

    let entry = move |item: NavItem| {
        let active = move || pathname.with(|path| item.is_active(path));
        view! {
            <a href=item.href class="mobile-nav-item" class:active=active>
                <span class="mobile-nav-icon" class:bounce=active>{icon(item.icon)}</span>
                <span class="mobile-nav-label">{item.label}</span>
            </a>
        }
    };

    view! {
        <nav class="mobile-nav">
            {PRIMARY_NAV.into_iter().map(entry).collect_view()}
        </nav>
    }
}

fn icon(name: &str) -> &'static str {
    match name {
        "home" => "🏠",
        "info" => "ℹ️",
        "package" => "📦",
        "mail" => "✉️",
        _ => "•",
    }
}
