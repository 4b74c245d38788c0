//! Auth actions
//!
//! Actions for the session lifecycle (restore, register, login, logout).

use contact_keeper_client::{LoginForm, RegisterForm, UserProfile};
use strum::IntoStaticStr;

/// Actions for the auth slice
///
/// `LoadUser`, `Register` and `Login` are requests: `AuthMiddleware`
/// consumes them and later dispatches exactly one result action.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthAction {
    /// Request: resolve the stored token to its user
    LoadUser,
    /// Request: create an account
    Register(RegisterForm),
    /// Request: exchange credentials for a token
    Login(LoginForm),

    /// Session check succeeded
    UserLoaded(UserProfile),
    RegisterSuccess { token: String },
    /// Registration failed with a user-facing message
    RegisterFail(String),
    /// Session check failed (no payload)
    AuthError,
    LoginSuccess { token: String },
    /// Login failed with a user-facing message
    LoginFail(String),
    Logout,
    ClearErrors,
}

impl AuthAction {
    /// Requests are handled by middleware and never reach the reducer
    pub fn is_request(&self) -> bool {
        matches!(self, Self::LoadUser | Self::Register(_) | Self::Login(_))
    }
}
