//! Alert Middleware
//!
//! Owns the alert expiry timers. `RaiseAlert` becomes a `SetAlert` for a new
//! alert plus a timer that dispatches `RemoveAlert` once the timeout elapses.
//! A manual `RemoveAlert` cancels the timer for that id.

use crate::actions::{Action, AlertAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::tasks::TaskRuntime;
use crate::middleware::Middleware;
use crate::state::{Alert, AlertId, AppState};
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Middleware for alert lifetimes
pub struct AlertMiddleware {
    default_timeout: Duration,
    runtime: TaskRuntime,
    timers: HashMap<AlertId, JoinHandle<()>>,
}

impl AlertMiddleware {
    pub fn new(default_timeout: Duration, runtime: TaskRuntime) -> Self {
        Self {
            default_timeout,
            runtime,
            timers: HashMap::new(),
        }
    }

    fn schedule_removal(&mut self, id: AlertId, timeout: Duration, dispatcher: &Dispatcher) {
        let dispatcher = dispatcher.clone();
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            dispatcher.dispatch(AlertAction::RemoveAlert(id));
        });

        if let Some(previous) = self.timers.insert(id, timer) {
            previous.abort();
        }
    }
}

impl Middleware for AlertMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Alert(action) = action else {
            return true;
        };

        match action {
            AlertAction::RaiseAlert {
                message,
                kind,
                timeout,
            } => {
                let alert = Alert::new(message.clone(), kind.clone());
                let id = alert.id;
                // SetAlert is queued before the timer exists, so it is
                // always reduced before the matching RemoveAlert
                dispatcher.dispatch(AlertAction::SetAlert(alert));
                self.schedule_removal(id, timeout.unwrap_or(self.default_timeout), dispatcher);
                false
            }

            AlertAction::SetAlert(alert) => {
                // Alerts set directly still expire
                if !self.timers.contains_key(&alert.id) {
                    self.schedule_removal(alert.id, self.default_timeout, dispatcher);
                }
                true
            }

            AlertAction::RemoveAlert(id) => {
                if let Some(timer) = self.timers.remove(id) {
                    timer.abort();
                }
                true
            }
        }
    }

    fn teardown(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }
}
