//! Route Table
//!
//! Fixed, ordered mapping from URL path to page. Matching is exact string
//! equality; anything not listed falls through to [`Route::NotFound`].

use serde::{Deserialize, Serialize};

/// A page the shell can mount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    About,
    Features,
    Contact,
    Login,
    Register,
    ForgotPassword,
    Terms,
    Privacy,
    /// Catch-all for every unmatched path
    NotFound,
}

/// Declared paths in match order. The wildcard is implicit and always last.
pub const ROUTE_TABLE: [(&str, Route); 9] = [
    ("/", Route::Landing),
    ("/about", Route::About),
    ("/features", Route::Features),
    ("/contact", Route::Contact),
    ("/login", Route::Login),
    ("/register", Route::Register),
    ("/forgot-password", Route::ForgotPassword),
    ("/terms", Route::Terms),
    ("/privacy", Route::Privacy),
];

impl Route {
    /// Select the page for a path
    pub fn resolve(path: &str) -> Self {
        ROUTE_TABLE
            .iter()
            .find(|(pattern, _)| *pattern == path)
            .map_or(Route::NotFound, |(_, route)| *route)
    }

    /// Whether the path is one of the declared routes
    pub fn is_declared(path: &str) -> bool {
        Self::resolve(path) != Route::NotFound
    }

    /// Canonical path, `None` for the fallback
    pub fn path(self) -> Option<&'static str> {
        ROUTE_TABLE
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(pattern, _)| *pattern)
    }

    /// Document title shown in the browser tab
    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Tumbuh Ide - Satu Link untuk Semua Profil Sosial Media",
            Route::About => "Tentang Kami - Tumbuh Ide",
            Route::Features => "Fitur - Tumbuh Ide",
            Route::Contact => "Kontak - Tumbuh Ide",
            Route::Login => "Masuk - Tumbuh Ide",
            Route::Register => "Daftar Gratis - Tumbuh Ide",
            Route::ForgotPassword => "Lupa Password - Tumbuh Ide",
            Route::Terms => "Syarat & Ketentuan - Tumbuh Ide",
            Route::Privacy => "Kebijakan Privasi - Tumbuh Ide",
            Route::NotFound => "Halaman Tidak Ditemukan - Tumbuh Ide",
        }
    }

    /// Account-entry pages render without the marketing chrome padding
    pub fn is_account_flow(self) -> bool {
        matches!(self, Route::Login | Route::Register | Route::ForgotPassword)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path().unwrap_or("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_path_resolves_to_its_page() {
        for (path, route) in ROUTE_TABLE {
            assert_eq!(Route::resolve(path), route, "path {path}");
            assert_eq!(route.path(), Some(path));
        }
    }

    #[test]
    fn test_unmatched_paths_fall_back() {
        for path in ["", "/nope", "/about/", "/About", "/login?next=/", "/terms/extra", "about"] {
            assert_eq!(Route::resolve(path), Route::NotFound, "path {path:?}");
            assert!(!Route::is_declared(path));
        }
    }

    #[test]
    fn test_table_paths_are_unique() {
        for (i, (a, _)) in ROUTE_TABLE.iter().enumerate() {
            for (b, _) in &ROUTE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_fallback_has_no_path() {
        assert_eq!(Route::NotFound.path(), None);
        assert_eq!(Route::NotFound.to_string(), "*");
        assert_eq!(Route::ForgotPassword.to_string(), "/forgot-password");
    }

    #[test]
    fn test_account_flows() {
        assert!(Route::Login.is_account_flow());
        assert!(Route::ForgotPassword.is_account_flow());
        assert!(!Route::Contact.is_account_flow());
    }
}
