//! Session Middleware
//!
//! Mirrors the session token into durable storage:
//!
//! - `RegisterSuccess` / `LoginSuccess` write the new token
//! - `RegisterFail` / `LoginFail` / `AuthError` / `Logout` remove it
//!
//! Storage errors are logged; they never block the action.

use crate::actions::{Action, AuthAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use contact_keeper_config::{KeyValueStore, TOKEN_KEY};
use std::sync::Arc;

/// Middleware for session token persistence
pub struct SessionMiddleware {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionMiddleware {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    fn save_token(&self, token: &str) {
        if let Err(e) = self.storage.set(TOKEN_KEY, token) {
            log::error!("SessionMiddleware: failed to save token: {:#}", e);
        }
    }

    fn clear_token(&self) {
        // Repeated logouts leave storage alone
        if self.storage.get(TOKEN_KEY).is_none() {
            return;
        }
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            log::error!("SessionMiddleware: failed to remove token: {:#}", e);
        }
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        let Action::Auth(action) = action else {
            return true;
        };

        match action {
            AuthAction::RegisterSuccess { token } | AuthAction::LoginSuccess { token } => {
                self.save_token(token);
            }
            AuthAction::RegisterFail(_)
            | AuthAction::LoginFail(_)
            | AuthAction::AuthError
            | AuthAction::Logout => {
                self.clear_token();
            }
            _ => {}
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingStore, dispatcher};

    fn handle(middleware: &mut SessionMiddleware, action: impl Into<Action>) -> bool {
        let (dispatcher, _rx) = dispatcher();
        middleware.handle(&action.into(), &AppState::default(), &dispatcher)
    }

    #[test]
    fn test_success_saves_token() {
        let storage = Arc::new(CountingStore::new());
        let mut middleware = SessionMiddleware::new(storage.clone());

        assert!(handle(
            &mut middleware,
            AuthAction::LoginSuccess {
                token: "test-token".to_string()
            }
        ));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("test-token"));

        handle(
            &mut middleware,
            AuthAction::RegisterSuccess {
                token: "other".to_string(),
            },
        );
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("other"));
    }

    #[test]
    fn test_failures_remove_token() {
        for action in [
            AuthAction::LoginFail("x".to_string()),
            AuthAction::RegisterFail("x".to_string()),
            AuthAction::AuthError,
            AuthAction::Logout,
        ] {
            let storage = Arc::new(CountingStore::with_token("stored"));
            let mut middleware = SessionMiddleware::new(storage.clone());
            assert!(handle(&mut middleware, action));
            assert_eq!(storage.get(TOKEN_KEY), None);
            assert_eq!(storage.removes(), 1);
        }
    }

    #[test]
    fn test_repeated_logout_removes_once() {
        let storage = Arc::new(CountingStore::with_token("stored"));
        let mut middleware = SessionMiddleware::new(storage.clone());

        handle(&mut middleware, AuthAction::Logout);
        handle(&mut middleware, AuthAction::Logout);
        assert_eq!(storage.removes(), 1);
    }

    #[test]
    fn test_other_actions_untouched() {
        let storage = Arc::new(CountingStore::with_token("stored"));
        let mut middleware = SessionMiddleware::new(storage.clone());

        assert!(handle(&mut middleware, AuthAction::ClearErrors));
        assert!(handle(&mut middleware, crate::actions::ContactAction::ClearContacts));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("stored"));
        assert_eq!(storage.writes(), 0);
    }
}
