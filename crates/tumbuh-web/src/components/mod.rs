//! UI Components

mod auth_card;
mod brand;
mod document;
mod feature_card;
mod footer;
mod header;
mod mobile_nav;
mod page_loader;
mod password_field;
mod toaster;

pub use auth_card::AuthCard;
pub use brand::Brand;
pub use document::DocumentView;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use header::Header;
pub use mobile_nav::MobileNav;
pub use page_loader::PageLoader;
pub use password_field::PasswordField;
pub use toaster::Toaster;
