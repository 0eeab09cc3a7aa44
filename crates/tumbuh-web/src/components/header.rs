//! Site Header
//!
//! Brand, primary navigation with active highlighting, theme toggle, the
//! account CTAs and the hamburger menu for small screens.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use tumbuh_core::{MobileMenu, NavItem, PRIMARY_NAV};

use super::Brand;
use crate::theme::use_theme;

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu = RwSignal::new(MobileMenu::default());

    let desktop_link = move |item: NavItem| {
        view! {
            <a
                href=item.href
                class="nav-link"
                class:active=move || pathname.with(|path| item.is_active(path))
            >
                {item.label}
            </a>
        }
    };

    let menu_link = move |item: NavItem| {
        view! {
            <a
                href=item.href
                class="mobile-menu-link"
                on:click=move |_| menu.update(MobileMenu::link_activated)
            >
                {item.label}
            </a>
        }
    };

    view! {
        <nav class="site-header">
            <div class="container header-bar">
                <Brand />

                <div class="desktop-nav">
                    {PRIMARY_NAV.into_iter().map(desktop_link).collect_view()}
                </div>

                <div class="header-actions">
                    <ThemeToggle />
                    <div class="header-cta">
                        <a href="/login" class="btn btn-outline">"Masuk"</a>
                        <a href="/register" class="btn btn-primary">"Daftar Gratis"</a>
                    </div>
                    <button
                        type="button"
                        class="btn btn-ghost menu-button"
                        aria-label="Menu"
                        on:click=move |_| menu.update(MobileMenu::toggle)
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="container mobile-menu">
                    {PRIMARY_NAV.into_iter().map(menu_link).collect_view()}
                    <div class="mobile-menu-cta">
                        <a
                            href="/login"
                            class="btn btn-outline"
                            on:click=move |_| menu.update(MobileMenu::link_activated)
                        >
                            "Masuk"
                        </a>
                        <a
                            href="/register"
                            class="btn btn-primary"
                            on:click=move |_| menu.update(MobileMenu::link_activated)
                        >
                            "Daftar Gratis"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="btn btn-ghost theme-toggle"
            aria-label="Ganti tema"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.get().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
