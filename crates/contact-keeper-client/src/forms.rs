//! Request bodies for account creation and login
//!
//! `Debug` output never includes the password.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Presence/equality checks the UI runs before invoking a store action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Body of `POST /api/users`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check required fields and the password confirmation
    pub fn validate(&self, password_confirmation: &str) -> Result<(), FormError> {
        if [&self.name, &self.email, &self.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(FormError::MissingFields);
        }
        if self.password != password_confirmation {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/auth`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
