//! Contacts State

use contact_keeper_client::Contact;

/// Contact collection state
///
/// `None` means "not loaded" and is distinct from an empty collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactsState {
    pub contacts: Option<Vec<Contact>>,
    /// Result of the last filter, `None` when no filter is active
    pub filtered: Option<Vec<Contact>>,
    /// Detached copy of the contact being edited
    pub current: Option<Contact>,
    pub error: Option<String>,
}

impl ContactsState {
    /// Contacts to display: the filtered view when active, else the collection
    pub fn visible(&self) -> &[Contact] {
        self.filtered
            .as_deref()
            .or(self.contacts.as_deref())
            .unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.as_ref()?.iter().find(|contact| contact.id == id)
    }
}
