//! Middleware system
//!
//! Middleware sits between dispatch and the reducer:
//!
//! ```text
//! Action → Logging → Session → Auth → Contact → Alert → [ErrorAlert] → Reducer
//! ```
//!
//! Each middleware can inspect the action and the current state, dispatch new
//! actions and start background work. Returning `false` consumes the action:
//! later middleware and the reducer never see it. Request actions are always
//! consumed by the middleware that performs them.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod alert_middleware;
pub mod auth_middleware;
pub mod contact_middleware;
pub mod error_alert_middleware;
pub mod logging;
pub mod session_middleware;
mod tasks;

pub use alert_middleware::AlertMiddleware;
pub use auth_middleware::AuthMiddleware;
pub use contact_middleware::ContactMiddleware;
pub use error_alert_middleware::ErrorAlertMiddleware;
pub use logging::LoggingMiddleware;
pub use session_middleware::SessionMiddleware;
pub use tasks::TaskRuntime;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// `handle` runs on the store's task and must not block. Long-running work is
/// spawned onto the store's [`TaskRuntime`] and reports back through the
/// dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch result actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;

    /// Number of spawned requests that have not completed yet
    ///
    /// Pending timers are not counted.
    fn in_flight(&mut self) -> usize {
        0
    }

    /// Cancel all background work; nothing is dispatched afterwards
    fn teardown(&mut self) {}
}
