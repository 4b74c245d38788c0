//! Application state
//!
//! One slice per store. Slices never reference each other, so each reducer
//! can be reasoned about on its own.

mod alerts;
mod auth;
mod contacts;

pub use alerts::{Alert, AlertId, AlertKind, AlertsState};
pub use auth::AuthState;
pub use contacts::ContactsState;

/// Application state - root of the state tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub contacts: ContactsState,
    pub alerts: AlertsState,
}

impl AppState {
    /// Initial state at process start, seeded with the token from durable storage
    pub fn new(token: Option<String>) -> Self {
        Self {
            auth: AuthState::initial(token),
            ..Self::default()
        }
    }
}
