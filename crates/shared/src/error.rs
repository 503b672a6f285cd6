use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inline message for the email field. `Display` output is the exact text
/// shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Please enter a valid email")]
    InvalidFormat,
}

/// Inline message for the password field. `Rejected` carries the credential
/// backend's hint verbatim; a rejected login is a normal outcome, never
/// escalated past this message slot.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
    #[error("Password must be at least 6 characters")]
    TooShort,
    #[error("{0}")]
    Rejected(String),
}

/// Per-field messages from the synchronous format checks. `None` for a field
/// means that field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub email: Option<EmailError>,
    pub password: Option<PasswordError>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
