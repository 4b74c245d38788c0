//! Error Alert Middleware
//!
//! Turns user-facing failures into danger alerts:
//! - `RegisterFail` / `LoginFail` raise an alert, then `ClearErrors`
//! - `ContactError` raises an alert
//!
//! Not installed by default. Add it with [`Store::add_middleware`] after
//! [`AlertMiddleware`](super::AlertMiddleware) when there is no UI doing the
//! same thing.
//!
//! [`Store::add_middleware`]: crate::Store::add_middleware

use crate::actions::{Action, AlertAction, AuthAction, ContactAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct ErrorAlertMiddleware;

impl ErrorAlertMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ErrorAlertMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Auth(AuthAction::RegisterFail(message) | AuthAction::LoginFail(message)) => {
                dispatcher.dispatch(AlertAction::danger(message.clone()));
                dispatcher.dispatch(AuthAction::ClearErrors);
            }
            Action::Contact(ContactAction::ContactError(message)) => {
                dispatcher.dispatch(AlertAction::danger(message.clone()));
            }
            _ => {}
        }

        true
    }
}
