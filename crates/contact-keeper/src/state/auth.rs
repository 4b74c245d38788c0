//! Auth State

use contact_keeper_client::UserProfile;

/// Session state
///
/// `is_authenticated` is `None` until the first session check resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub is_authenticated: Option<bool>,
    /// True from process start until the first session result arrives
    pub loading: bool,
    pub user: Option<UserProfile>,
    pub error: Option<String>,
}

impl AuthState {
    /// State at process start; `token` comes from durable storage
    pub fn initial(token: Option<String>) -> Self {
        Self {
            token,
            is_authenticated: None,
            loading: true,
            user: None,
            error: None,
        }
    }

    /// Authenticated and the user profile is loaded
    pub fn is_logged_in(&self) -> bool {
        self.is_authenticated == Some(true) && self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initial(None)
    }
}
