//! Actions module
//!
//! Actions are tagged by the slice they belong to. Each slice enum mixes two
//! kinds of actions:
//! - Requests, which middleware consumes to perform I/O
//! - Plain result actions, the only ones the reducers ever see

pub mod alert;
pub mod auth;
pub mod contact;

pub use alert::AlertAction;
pub use auth::AuthAction;
pub use contact::ContactAction;

/// Root action enum - tagged by slice
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Session actions
    Auth(AuthAction),
    /// Contact collection actions
    Contact(ContactAction),
    /// Alert list actions
    Alert(AlertAction),

    /// No-op action
    None,
}

impl Action {
    /// Action type name, e.g. `LOGIN_SUCCESS`
    ///
    /// Never includes the payload, so it is safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth(action) => action.into(),
            Self::Contact(action) => action.into(),
            Self::Alert(action) => action.into(),
            Self::None => "NONE",
        }
    }

    /// Whether this is a request that middleware turns into I/O
    pub fn is_request(&self) -> bool {
        match self {
            Self::Auth(action) => action.is_request(),
            Self::Contact(action) => action.is_request(),
            Self::Alert(action) => action.is_request(),
            Self::None => false,
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<ContactAction> for Action {
    fn from(action: ContactAction) -> Self {
        Self::Contact(action)
    }
}

impl From<AlertAction> for Action {
    fn from(action: AlertAction) -> Self {
        Self::Alert(action)
    }
}
