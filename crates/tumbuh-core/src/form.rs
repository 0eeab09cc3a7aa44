//! Form State and Validation
//!
//! Each account-entry page owns one of these structs. Validation turns the
//! raw field values into the request sent to the account/content API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::Notice;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// A labelled input, used in "required" messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Name,
    Email,
    Password,
    ConfirmPassword,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName | Field::Name => "Nama lengkap",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Konfirmasi password",
            Field::Message => "Pesan",
        }
    }
}

/// Local, user-correctable validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} wajib diisi", .0.label())]
    Required(Field),

    #[error("Format email tidak valid")]
    InvalidEmail,

    #[error("Password minimal {min} karakter")]
    PasswordTooShort { min: usize },

    #[error("Password dan konfirmasi password tidak sama")]
    PasswordMismatch,

    #[error("Anda harus menyetujui syarat dan ketentuan")]
    TermsNotAccepted,
}

/// What a page does with its state once a submission succeeds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Clear every field
    Reset,
    /// Keep the fields and switch to a confirmation view
    Confirm,
}

/// Page-local form state
pub trait Form: Default {
    /// Payload handed to the account/content API
    type Request;

    /// Toast shown after a successful submission
    const SUCCESS: Notice;

    const AFTER_SUCCESS: AfterSubmit;

    fn validate(&self) -> Result<Self::Request, ValidationError>;

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn required(value: &str, field: Field) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn email(value: &str) -> Result<String, ValidationError> {
    let email = required(value, Field::Email)?;
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(email)
        }
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Raw passwords are kept verbatim; only emptiness is checked
fn password(value: &str, field: Field) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

// ============================================================================
// Select options
// ============================================================================

/// Account type chosen at registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ContentCreator,
    Brand,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::ContentCreator, Role::Brand];

    pub fn value(self) -> &'static str {
        match self {
            Role::ContentCreator => "content_creator",
            Role::Brand => "brand",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::ContentCreator => "Content Creator",
            Role::Brand => "Brand / Bisnis",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Surabaya,
    Gresik,
    Sidoarjo,
    Malang,
    Jakarta,
    Bandung,
    Yogyakarta,
    Other,
}

impl City {
    pub const ALL: [City; 8] = [
        City::Surabaya,
        City::Gresik,
        City::Sidoarjo,
        City::Malang,
        City::Jakarta,
        City::Bandung,
        City::Yogyakarta,
        City::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            City::Surabaya => "surabaya",
            City::Gresik => "gresik",
            City::Sidoarjo => "sidoarjo",
            City::Malang => "malang",
            City::Jakarta => "jakarta",
            City::Bandung => "bandung",
            City::Yogyakarta => "yogyakarta",
            City::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            City::Surabaya => "Surabaya",
            City::Gresik => "Gresik",
            City::Sidoarjo => "Sidoarjo",
            City::Malang => "Malang",
            City::Jakarta => "Jakarta",
            City::Bandung => "Bandung",
            City::Yogyakarta => "Yogyakarta",
            City::Other => "Lainnya",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Contact form topic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Support,
    Feature,
    Partnership,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Support,
        Subject::Feature,
        Subject::Partnership,
        Subject::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Subject::Support => "support",
            Subject::Feature => "feature",
            Subject::Partnership => "partnership",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Support => "Bantuan Teknis",
            Subject::Feature => "Request Fitur",
            Subject::Partnership => "Kerjasama",
            Subject::Other => "Lainnya",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<City>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    pub message: String,
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl Form for LoginForm {
    type Request = Credentials;

    const SUCCESS: Notice = Notice {
        title: "Berhasil Masuk!",
        description: "Selamat datang kembali di Tumbuh Ide",
    };

    const AFTER_SUCCESS: AfterSubmit = AfterSubmit::Reset;

    fn validate(&self) -> Result<Credentials, ValidationError> {
        Ok(Credentials {
            email: email(&self.email)?,
            password: password(&self.password, Field::Password)?,
            remember: self.remember,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub location: Option<City>,
    pub agree_terms: bool,
}

impl Form for RegisterForm {
    type Request = RegistrationRequest;

    const SUCCESS: Notice = Notice {
        title: "Registrasi Berhasil!",
        description: "Silakan cek email untuk verifikasi akun",
    };

    const AFTER_SUCCESS: AfterSubmit = AfterSubmit::Reset;

    /// Checks run in order: required fields, email format, password
    /// length, confirmation match, terms.
    fn validate(&self) -> Result<RegistrationRequest, ValidationError> {
        let full_name = required(&self.full_name, Field::FullName)?;
        let email = email(&self.email)?;
        let chosen = password(&self.password, Field::Password)?;
        let confirmation = password(&self.confirm_password, Field::ConfirmPassword)?;

        if chosen.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }
        if chosen != confirmation {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.agree_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(RegistrationRequest {
            full_name,
            email,
            password: chosen,
            role: self.role,
            location: self.location,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Form for ForgotPasswordForm {
    type Request = PasswordResetRequest;

    const SUCCESS: Notice = Notice {
        title: "Email Terkirim!",
        description: "Silakan cek email Anda untuk reset password",
    };

    const AFTER_SUCCESS: AfterSubmit = AfterSubmit::Confirm;

    fn validate(&self) -> Result<PasswordResetRequest, ValidationError> {
        Ok(PasswordResetRequest { email: email(&self.email)? })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl Form for ContactForm {
    type Request = ContactMessage;

    const SUCCESS: Notice = Notice {
        title: "Pesan Terkirim!",
        description: "Terima kasih! Pesan Anda telah dikirim. Kami akan membalas dalam 24 jam.",
    };

    const AFTER_SUCCESS: AfterSubmit = AfterSubmit::Reset;

    fn validate(&self) -> Result<ContactMessage, ValidationError> {
        Ok(ContactMessage {
            name: required(&self.name, Field::Name)?,
            email: email(&self.email)?,
            subject: self.subject,
            message: required(&self.message, Field::Message)?,
        })
    }
}

/// Forgot-password page view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetStage {
    /// Email entry form
    #[default]
    Request,
    /// "Email sent" confirmation
    Sent,
}

impl ResetStage {
    /// "Resend" goes back to the form with the email kept
    pub fn resend(&mut self) {
        *self = ResetStage::Request;
    }
}
