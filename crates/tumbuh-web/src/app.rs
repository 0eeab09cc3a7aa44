//! Main App Component
//!
//! Root component wires the backend, theme and toasts into context; the
//! shell renders the chrome around the routed page and drives the
//! loading overlay from the current path. Pages are picked by exact path
//! through the core route table, so `/about/` is the not-found page.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use tumbuh_core::{AccountApi, PageLoadSignal, Route, SimulatedAccountApi, SiteConfig};

use crate::api::HttpAccountApi;
use crate::components::{Footer, Header, MobileNav, PageLoader, Toaster};
use crate::context::{provide_site_context, use_site_config};
use crate::pages::{
    AboutPage, ContactPage, FeaturesPage, ForgotPasswordPage, LandingPage, LoginPage, NotFoundPage,
    PrivacyPage, RegisterPage, TermsPage,
};
use crate::theme::provide_theme;
use crate::timer::GlooScheduler;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = site_config();
    let api: Arc<dyn AccountApi> = match &config.api_base {
        Some(base) => Arc::new(HttpAccountApi::new(base.as_str())),
        None => Arc::new(SimulatedAccountApi::new(GlooScheduler, config.submit_delay())),
    };

    provide_theme(config.theme_storage_key.clone());
    provide_site_context(config, api);

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Build-time settings: `TUMBUH_SITE_CONFIG` (JSON) overlaid by
/// `TUMBUH_API_BASE`. Anything invalid falls back to the defaults, which
/// run against the simulated API.
fn site_config() -> SiteConfig {
    let config = match option_env!("TUMBUH_SITE_CONFIG") {
        Some(raw) => SiteConfig::from_json(raw),
        None => Ok(SiteConfig::default()),
    };
    let config = config.and_then(|config| match option_env!("TUMBUH_API_BASE") {
        Some(base) => config.with_api_base(Some(base)),
        None => Ok(config),
    });
    match config {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "invalid site config, using defaults");
            SiteConfig::default()
        }
    }
}

#[component]
fn Shell() -> impl IntoView {
    let config = use_site_config();
    let pathname = use_location().pathname;
    let (loading, set_loading) = signal(false);

    let mut loader = PageLoadSignal::new(GlooScheduler, config.page_load_delay(), move |active| {
        set_loading.try_set(active);
    });
    Effect::new(move |_| {
        pathname.with(|path| loader.navigate(path));
    });

    let route = Memo::new(move |_| pathname.with(|path| Route::resolve(path)));
    Effect::new(move |_| {
        let route = route.get();
        tracing::debug!(%route, "route changed");
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(route.title());
        }
    });

    view! {
        <div class="app">
            <Show when=move || loading.get()>
                <PageLoader />
            </Show>
            <Header />
            <main class=move || if route.get().is_account_flow() { "main main-auth" } else { "main" }>
                <div class="animate-fade-in">
                    {move || page(route.get())}
                </div>
            </main>
            <Footer />
            <MobileNav />
            <Toaster />
        </div>
    }
}

/// Page for a resolved route
///
/// Picked from `Route::resolve` rather than `<Routes>` so the browser and
/// the static host share one exact-path table and agree on what is 404.
fn page(route: Route) -> AnyView {
    match route {
        Route::Landing => view! { <LandingPage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Features => view! { <FeaturesPage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Route::Terms => view! { <TermsPage /> }.into_any(),
        Route::Privacy => view! { <PrivacyPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
