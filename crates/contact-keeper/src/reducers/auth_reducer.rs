//! Auth Reducer
//!
//! Handles session state transitions. Durable storage is mirrored by
//! `SessionMiddleware`; nothing here performs I/O.

use crate::actions::AuthAction;
use crate::state::AuthState;

/// Reduce auth actions
pub fn reduce_auth(mut state: AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::UserLoaded(user) => {
            state.is_authenticated = Some(true);
            state.loading = false;
            state.user = Some(user.clone());
        }

        AuthAction::RegisterSuccess { token } | AuthAction::LoginSuccess { token } => {
            // User stays unset until the follow-up session check
            state.token = Some(token.clone());
            state.is_authenticated = Some(true);
            state.loading = false;
        }

        AuthAction::RegisterFail(message) | AuthAction::LoginFail(message) => {
            state = logged_out(state);
            state.error = Some(message.clone());
        }

        AuthAction::AuthError => {
            state = logged_out(state);
            state.error = None;
        }

        AuthAction::Logout => {
            state = logged_out(state);
        }

        AuthAction::ClearErrors => {
            state.error = None;
        }

        // Requests are consumed by middleware
        AuthAction::LoadUser | AuthAction::Register(_) | AuthAction::Login(_) => {}
    }
    state
}

/// Logged-out shape; `error` is left to the caller
fn logged_out(state: AuthState) -> AuthState {
    AuthState {
        token: None,
        is_authenticated: Some(false),
        loading: false,
        user: None,
        error: state.error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user;
    use contact_keeper_client::LoginForm;

    fn logged_in() -> AuthState {
        AuthState {
            token: Some("test-token".to_string()),
            is_authenticated: Some(true),
            loading: false,
            user: Some(user()),
            error: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AuthState::initial(Some("stored".to_string()));
        assert_eq!(state.token.as_deref(), Some("stored"));
        assert_eq!(state.is_authenticated, None);
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_user_loaded() {
        let initial = AuthState::initial(Some("stored".to_string()));
        let state = reduce_auth(initial, &AuthAction::UserLoaded(user()));

        assert_eq!(state.is_authenticated, Some(true));
        assert!(!state.loading);
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.token.as_deref(), Some("stored"));
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_login_and_register_success() {
        for action in [
            AuthAction::LoginSuccess {
                token: "test-token".to_string(),
            },
            AuthAction::RegisterSuccess {
                token: "test-token".to_string(),
            },
        ] {
            let state = reduce_auth(AuthState::default(), &action);
            assert_eq!(state.token.as_deref(), Some("test-token"));
            assert_eq!(state.is_authenticated, Some(true));
            assert!(!state.loading);
            // Populated by the follow-up session check
            assert!(state.user.is_none());
        }
    }

    #[test]
    fn test_login_and_register_fail() {
        for action in [
            AuthAction::LoginFail("Invalid Credentials".to_string()),
            AuthAction::RegisterFail("Invalid Credentials".to_string()),
        ] {
            let state = reduce_auth(logged_in(), &action);
            assert_eq!(state.token, None);
            assert_eq!(state.is_authenticated, Some(false));
            assert!(!state.loading);
            assert!(state.user.is_none());
            assert_eq!(state.error.as_deref(), Some("Invalid Credentials"));
        }
    }

    #[test]
    fn test_auth_error_clears_session_and_error() {
        let mut previous = logged_in();
        previous.error = Some("stale".to_string());

        let state = reduce_auth(previous, &AuthAction::AuthError);
        assert_eq!(state.token, None);
        assert_eq!(state.is_authenticated, Some(false));
        assert!(state.user.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_logout_keeps_error() {
        let mut previous = logged_in();
        previous.error = Some("Some error".to_string());

        let state = reduce_auth(previous, &AuthAction::Logout);
        assert_eq!(state.token, None);
        assert_eq!(state.is_authenticated, Some(false));
        assert!(!state.loading);
        assert!(state.user.is_none());
        assert_eq!(state.error.as_deref(), Some("Some error"));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let once = reduce_auth(logged_in(), &AuthAction::Logout);
        let twice = reduce_auth(once.clone(), &AuthAction::Logout);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clear_errors_touches_only_error() {
        let mut previous = logged_in();
        previous.error = Some("Some error".to_string());

        let state = reduce_auth(previous, &AuthAction::ClearErrors);
        assert_eq!(state, logged_in());
    }

    #[test]
    fn test_requests_are_identity() {
        let initial = AuthState::initial(Some("stored".to_string()));
        for action in [
            AuthAction::LoadUser,
            AuthAction::Login(LoginForm::new("test@test.com", "password123")),
        ] {
            assert_eq!(reduce_auth(initial.clone(), &action), initial);
        }
    }

    #[test]
    fn test_loading_never_returns_to_true() {
        let actions = [
            AuthAction::LoginFail("x".to_string()),
            AuthAction::ClearErrors,
            AuthAction::LoginSuccess {
                token: "t".to_string(),
            },
            AuthAction::UserLoaded(user()),
            AuthAction::Logout,
        ];
        let mut state = AuthState::initial(None);
        for action in &actions {
            state = reduce_auth(state, action);
            assert!(!state.loading);
        }
    }
}
