//! Alert State

use chrono::{DateTime, Local};
use std::fmt;
use uuid::Uuid;

/// Globally unique alert identifier, generated at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(Uuid);

impl AlertId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of alert (determines how the UI styles it)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    /// Any other style name the UI understands
    Other(String),
}

impl AlertKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for AlertKind {
    fn from(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub kind: AlertKind,
    /// When the alert was created
    pub created_at: DateTime<Local>,
}

impl Alert {
    /// Create a new alert with a fresh id and the current timestamp
    pub fn new(message: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            id: AlertId::new(),
            message: message.into(),
            kind,
            created_at: Local::now(),
        }
    }
}

/// Alert list state; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertsState {
    pub alerts: Vec<Alert>,
}

impl AlertsState {
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn contains(&self, id: AlertId) -> bool {
        self.alerts.iter().any(|alert| alert.id == id)
    }

    /// Most recently added alert
    pub fn latest(&self) -> Option<&Alert> {
        self.alerts.last()
    }
}
