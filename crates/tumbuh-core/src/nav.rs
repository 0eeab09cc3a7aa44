//! Navigation Model
//!
//! Entries shared by the header and the bottom mobile bar, plus the
//! hamburger menu state.

use crate::route::Route;

/// A primary navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label
    pub label: &'static str,
    /// Link target
    pub href: &'static str,
    /// Icon name used by the mobile bar
    pub icon: &'static str,
}

impl NavItem {
    /// Active when the current path equals the link target
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }

    pub fn route(&self) -> Route {
        Route::resolve(self.href)
    }
}

pub const PRIMARY_NAV: [NavItem; 4] = [
    NavItem { label: "Beranda", href: "/", icon: "home" },
    NavItem { label: "Tentang", href: "/about", icon: "info" },
    NavItem { label: "Fitur", href: "/features", icon: "package" },
    NavItem { label: "Kontak", href: "/contact", icon: "mail" },
];

/// Hamburger menu state
///
/// Toggling is independent of the route; activating a link inside the
/// open menu closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was activated
    pub fn link_activated(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_entry_active_per_primary_path() {
        for item in PRIMARY_NAV {
            let active: Vec<_> = PRIMARY_NAV
                .iter()
                .filter(|other| other.is_active(item.href))
                .collect();
            assert_eq!(active, vec![&item]);
        }
    }

    #[test]
    fn test_no_entry_active_off_menu() {
        assert!(PRIMARY_NAV.iter().all(|item| !item.is_active("/login")));
        assert!(PRIMARY_NAV.iter().all(|item| !item.is_active("/about/")));
    }

    #[test]
    fn test_nav_targets_are_declared_routes() {
        for item in PRIMARY_NAV {
            assert_ne!(item.route(), Route::NotFound);
        }
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.link_activated();
        assert!(!menu.is_open());
        menu.link_activated();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
