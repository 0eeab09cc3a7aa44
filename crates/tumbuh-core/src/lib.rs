//! # tumbuh-core
//!
//! Target-independent core of the Tumbuh Ide marketing site: the route
//! table, navigation model, page-load signal, form validation, toast queue
//! and the account/content API abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Application Shell                        │
//! │  ┌─────────────┐  ┌────────────────┐  ┌──────────────────┐   │
//! │  │ Route Table │  │ PageLoadSignal │  │   Toast Queue    │   │
//! │  │  (resolve)  │──│ (cancel + arm) │  │   (Notifier)     │   │
//! │  └─────────────┘  └───────┬────────┘  └────────▲─────────┘   │
//! │                           │ Scheduler          │ notify       │
//! │  ┌────────────────────────▼────────────────────┴──────────┐  │
//! │  │ Form pages: Form::validate → AccountApi (Strategy)      │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timers go through the [`Scheduler`] trait so the same logic runs on the
//! browser event loop (front end) and on tokio (tests, native hosts).

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod loader;
pub mod nav;
pub mod notify;
pub mod route;
pub mod submit;
pub mod theme;
pub mod timer;

pub use api::{AccountApi, ApiError, ApiResult, SimulatedAccountApi};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use form::{AfterSubmit, Form, ValidationError};
pub use loader::PageLoadSignal;
pub use nav::{MobileMenu, NavItem, PRIMARY_NAV};
pub use notify::{Notice, Notifier, Severity, Toast, ToastId, ToastQueue};
pub use route::Route;
pub use submit::SubmissionState;
pub use theme::Theme;
pub use timer::{Scheduler, TimerHandle};
