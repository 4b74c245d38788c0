//! Alert actions

use crate::state::{Alert, AlertId, AlertKind};
use std::time::Duration;
use strum::IntoStaticStr;

/// Actions for the alerts slice
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertAction {
    /// Request: create an alert and schedule its removal.
    /// `timeout: None` uses the configured default.
    RaiseAlert {
        message: String,
        kind: AlertKind,
        timeout: Option<Duration>,
    },

    /// Append an alert
    SetAlert(Alert),
    /// Remove an alert by id; absent ids are ignored
    RemoveAlert(AlertId),
}

impl AlertAction {
    /// Create a raise request
    pub fn raise(
        message: impl Into<String>,
        kind: impl Into<AlertKind>,
        timeout: Option<Duration>,
    ) -> Self {
        Self::RaiseAlert {
            message: message.into(),
            kind: kind.into(),
            timeout,
        }
    }

    /// Create a danger alert request with the default timeout
    pub fn danger(message: impl Into<String>) -> Self {
        Self::raise(message, AlertKind::Danger, None)
    }

    pub fn is_request(&self) -> bool {
        matches!(self, Self::RaiseAlert { .. })
    }
}
