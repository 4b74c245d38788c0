//! Client-side state for the contact keeper app
//!
//! Three independent slices (auth, contacts, alerts) live in one [`Store`]:
//!
//! ```text
//! operation → Action → Middleware chain → Reducer → AppState
//!                           │                  ▲
//!                           ▼                  │
//!                     spawned task ──────► Dispatcher
//!                   (API call / timer)    (result action)
//! ```
//!
//! Request actions (login, fetch contacts, raise alert, ...) are consumed by
//! middleware, which performs the I/O on a Tokio task and dispatches the
//! result action. Reducers only ever see result actions and stay pure.

pub mod actions;
pub mod dispatcher;
pub mod middleware;
pub mod operations;
pub mod reducers;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use actions::{Action, AlertAction, AuthAction, ContactAction};
pub use dispatcher::Dispatcher;
pub use middleware::Middleware;
pub use state::{Alert, AlertId, AlertKind, AlertsState, AppState, AuthState, ContactsState};
pub use store::Store;
