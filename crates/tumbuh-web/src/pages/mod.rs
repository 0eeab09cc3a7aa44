//! Page Components

mod about;
mod contact;
mod features;
mod forgot_password;
mod landing;
mod legal;
mod login;
mod not_found;
mod register;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use forgot_password::ForgotPasswordPage;
pub use landing::LandingPage;
pub use legal::{PrivacyPage, TermsPage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
