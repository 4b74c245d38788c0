use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::{
    AlertMiddleware, AuthMiddleware, ContactMiddleware, LoggingMiddleware, Middleware,
    SessionMiddleware, TaskRuntime,
};
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use anyhow::{Context, Result};
use contact_keeper_client::ContactsApi;
use contact_keeper_config::{AppConfig, KeyValueStore, TOKEN_KEY};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// How often `settle` re-checks in-flight requests while the queue is idle
const SETTLE_POLL: Duration = Duration::from_millis(50);

/// Store - holds application state and manages the Redux loop
///
/// Actions dispatched through [`Store::dispatch`] run through the middleware
/// chain and the reducer immediately. Results of background work arrive on
/// the dispatcher's channel and are applied when the owner calls
/// [`drain`](Store::drain), [`process_next`](Store::process_next) or
/// [`settle`](Store::settle). Every reducer transition therefore happens on
/// the task that owns the store, one at a time.
///
/// Requests and alert timers run on the [`TaskRuntime`] chosen by
/// [`with_services`](Store::with_services), so operations can be called with
/// or without an ambient Tokio runtime. [`settle`](Store::settle) and
/// [`process_next`](Store::process_next) still need one to wait on.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<AppState>,
}

impl Store {
    /// Create a bare store without middleware
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(initial_state.clone());

        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
            state_tx,
        }
    }

    /// Create a store wired to the API and durable storage
    ///
    /// The initial session token is read from `storage`. Middleware order:
    /// logging, session persistence, auth requests, contact requests, alerts.
    ///
    /// Background work uses the current Tokio runtime. Outside of one the
    /// store starts its own worker runtime; failing to start it is the only
    /// error.
    pub fn with_services(
        api: Arc<dyn ContactsApi>,
        storage: Arc<dyn KeyValueStore>,
        config: &AppConfig,
    ) -> Result<Self> {
        let runtime =
            TaskRuntime::current_or_owned().context("Failed to start the task runtime")?;
        Ok(Self::with_runtime(api, storage, config, runtime))
    }

    /// Like [`with_services`](Store::with_services), spawning onto `runtime`
    pub fn with_runtime(
        api: Arc<dyn ContactsApi>,
        storage: Arc<dyn KeyValueStore>,
        config: &AppConfig,
        runtime: TaskRuntime,
    ) -> Self {
        let token = storage.get(TOKEN_KEY);
        log::debug!("Store: stored session token present: {}", token.is_some());

        let mut store = Self::new(AppState::new(token));
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(SessionMiddleware::new(Arc::clone(&storage))));
        store.add_middleware(Box::new(AuthMiddleware::new(
            Arc::clone(&api),
            Arc::clone(&storage),
            runtime.clone(),
        )));
        store.add_middleware(Box::new(ContactMiddleware::new(
            api,
            storage,
            runtime.clone(),
        )));
        store.add_middleware(Box::new(AlertMiddleware::new(
            config.alert_timeout(),
            runtime,
        )));
        store
    }

    /// Add middleware to the end of the chain
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Receive a snapshot of the state after every change
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_tx.subscribe()
    }

    /// Process an action, then everything it queued
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        self.process(action.into());
        self.drain();
    }

    /// Apply every queued action without waiting; returns how many ran
    pub fn drain(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
            processed += 1;
        }
        processed
    }

    /// Wait until an action arrives, then apply it along with anything it
    /// queues in turn
    ///
    /// The store holds a sender of its own, so with nothing in flight and no
    /// pending alert timer this waits forever.
    pub async fn process_next(&mut self) {
        if let Some(action) = self.action_rx.recv().await {
            self.process(action);
            self.drain();
        }
    }

    /// Wait until no request is in flight and the queue is empty
    ///
    /// Pending alert timers are not waited for.
    pub async fn settle(&mut self) {
        loop {
            self.drain();
            if self.in_flight() == 0 {
                // A finished request has already queued its result
                if self.drain() == 0 {
                    break;
                }
                continue;
            }

            if let Ok(Some(action)) =
                tokio::time::timeout(SETTLE_POLL, self.action_rx.recv()).await
            {
                self.process(action);
            }
        }
    }

    /// Number of requests that have not completed yet
    pub fn in_flight(&mut self) -> usize {
        self.middleware
            .iter_mut()
            .map(|middleware| middleware.in_flight())
            .sum()
    }

    /// Abort in-flight requests and alert timers
    ///
    /// Results that were already queued are discarded.
    pub fn teardown(&mut self) {
        for middleware in &mut self.middleware {
            middleware.teardown();
        }
        let discarded = std::iter::from_fn(|| self.action_rx.try_recv().ok()).count();
        if discarded > 0 {
            log::debug!("Store: discarded {} queued actions on teardown", discarded);
        }
    }

    /// Process an action through middleware chain and reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            if action.is_request() {
                log::debug!("Store: no middleware handled {}", action.name());
            }
            let next = reduce(self.state.clone(), &action);
            if next != self.state {
                self.state = next;
                self.state_tx.send_replace(self.state.clone());
            }
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.teardown();
    }
}
