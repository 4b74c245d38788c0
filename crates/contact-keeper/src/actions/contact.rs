//! Contact actions
//!
//! Actions for the contact collection: CRUD, edit selection and filtering.

use contact_keeper_client::{Contact, ContactDraft, ContactId};
use strum::IntoStaticStr;

/// Actions for the contacts slice
///
/// The `FetchContacts`, `CreateContact`, `SaveContact` and `DestroyContact`
/// requests are consumed by `ContactMiddleware`; the collection only changes
/// once the matching result action arrives.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactAction {
    /// Request: load the full collection
    FetchContacts,
    /// Request: store a new contact
    CreateContact(ContactDraft),
    /// Request: update a stored contact
    SaveContact(Contact),
    /// Request: delete a stored contact
    DestroyContact(ContactId),

    /// Collection loaded
    GetContacts(Vec<Contact>),
    /// Contact stored, with its server-assigned id
    AddContact(Contact),
    UpdateContact(Contact),
    DeleteContact(ContactId),
    /// Start editing a contact
    SetCurrent(Contact),
    ClearCurrent,
    /// Filter by case-insensitive substring of name or email
    FilterContacts(String),
    ClearFilter,
    /// Forget all contact data (e.g. on logout)
    ClearContacts,
    /// A contact request failed with a user-facing message
    ContactError(String),
}

impl ContactAction {
    /// Requests are handled by middleware and never reach the reducer
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Self::FetchContacts
                | Self::CreateContact(_)
                | Self::SaveContact(_)
                | Self::DestroyContact(_)
        )
    }
}
