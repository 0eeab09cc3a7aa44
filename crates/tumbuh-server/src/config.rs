//! Server Configuration

use std::path::PathBuf;

/// Host settings, read from the environment after `.env` is loaded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,

    /// Directory holding the built front end (`STATIC_DIR`)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            bind_addr: non_blank("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            static_dir: non_blank("STATIC_DIR").map_or_else(|| PathBuf::from("dist"), PathBuf::from),
        }
    }

    /// The SPA shell every client-side route is answered with
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
