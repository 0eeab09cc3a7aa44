//! Theme Persistence
//!
//! Keeps the `dark` class on `<html>` and local storage in step with the
//! theme signal.

use leptos::prelude::*;
use tumbuh_core::Theme;
use web_sys::Storage;

/// Current theme, shared by the toggle buttons
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// Load the stored theme and keep the document and storage in sync
pub fn provide_theme(storage_key: String) {
    let stored = local_storage().and_then(|s| s.get_item(&storage_key).ok().flatten());
    let theme = RwSignal::new(Theme::from_stored(stored.as_deref()));

    Effect::new(move |_| {
        let current = theme.get();
        apply(current);
        store(&storage_key, current);
    });

    provide_context(ThemeContext { theme });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            tracing::warn!(error = ?e, "failed to apply theme class");
        }
    }
}

fn store(key: &str, theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(key, theme.as_str()) {
        tracing::warn!(error = ?e, "failed to persist theme");
    }
}
