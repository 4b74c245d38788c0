//! Contacts API data transfer objects
//!
//! The backend stores records in MongoDB, so identifiers may arrive as `_id`.
//! Both spellings are accepted; `id` is always written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned contact identifier
pub type ContactId = String;

/// The authenticated user, as returned by `GET /api/auth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    pub email: String,

    /// Registration date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Contact category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Personal,
    Business,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Assigned by the server, immutable afterwards
    #[serde(alias = "_id")]
    pub id: ContactId,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(rename = "type", default)]
    pub kind: ContactKind,
}

impl Contact {
    /// Case-insensitive match of `needle` against name or email.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }

    /// Drop the identifier, e.g. to re-submit the fields as a new contact
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            kind: self.kind,
        }
    }
}

/// A contact that has not been stored yet (no id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(rename = "type", default)]
    pub kind: ContactKind,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn kind(mut self, kind: ContactKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach a server-assigned id
    pub fn with_id(self, id: impl Into<ContactId>) -> Contact {
        Contact {
            id: id.into(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            kind: self.kind,
        }
    }
}

/// Response of `POST /api/users` and `POST /api/auth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
