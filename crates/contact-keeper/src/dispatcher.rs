//! Dispatcher for middleware action dispatch
//!
//! Middleware never reduces anything itself. When a spawned request or timer
//! completes, it sends the result action through a [`Dispatcher`]; the store
//! picks it up and runs it through the full middleware chain.

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

/// Dispatcher for sending actions back into the store
///
/// Cheap to clone; every spawned task owns its own copy.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// Fails only after the store has been dropped, in which case the action
    /// is discarded.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action {}", e.0.name());
        }
    }
}
