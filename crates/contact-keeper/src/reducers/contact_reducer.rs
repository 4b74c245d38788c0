//! Contact Reducer
//!
//! Handles the contact collection, the edit selection and the filtered view.
//!
//! `filtered` is only computed by `FilterContacts`. Collection changes leave
//! it as it was, so a filter applied before a reload shows the old snapshot
//! until the filter is applied again.

use crate::actions::ContactAction;
use crate::state::ContactsState;
use contact_keeper_client::Contact;

/// Reduce contact actions
pub fn reduce_contacts(mut state: ContactsState, action: &ContactAction) -> ContactsState {
    match action {
        ContactAction::GetContacts(contacts) => {
            state.contacts = Some(contacts.clone());
        }

        ContactAction::AddContact(contact) => {
            let contacts = state.contacts.get_or_insert_with(Vec::new);
            // Ids are unique: a repeated id replaces the stored entry
            match contacts.iter_mut().find(|existing| existing.id == contact.id) {
                Some(existing) => *existing = contact.clone(),
                None => contacts.push(contact.clone()),
            }
        }

        ContactAction::UpdateContact(contact) => {
            if let Some(existing) = state
                .contacts
                .as_mut()
                .and_then(|contacts| contacts.iter_mut().find(|c| c.id == contact.id))
            {
                *existing = contact.clone();
            } else {
                log::debug!("UpdateContact: no contact with id {}", contact.id);
            }
        }

        ContactAction::DeleteContact(id) => {
            if let Some(contacts) = state.contacts.as_mut() {
                contacts.retain(|contact| &contact.id != id);
            }
            if state.current.as_ref().is_some_and(|current| &current.id == id) {
                state.current = None;
            }
        }

        ContactAction::SetCurrent(contact) => {
            state.current = Some(contact.clone());
        }

        ContactAction::ClearCurrent => {
            state.current = None;
        }

        ContactAction::FilterContacts(text) => {
            state.filtered = Some(filter(state.contacts.as_deref().unwrap_or_default(), text));
        }

        ContactAction::ClearFilter => {
            state.filtered = None;
        }

        ContactAction::ClearContacts => {
            state = ContactsState::default();
        }

        ContactAction::ContactError(message) => {
            state.error = Some(message.clone());
        }

        // Requests are consumed by middleware
        ContactAction::FetchContacts
        | ContactAction::CreateContact(_)
        | ContactAction::SaveContact(_)
        | ContactAction::DestroyContact(_) => {}
    }
    state
}

/// Subsequence of `contacts` whose name or email contains `text`, ignoring case
fn filter(contacts: &[Contact], text: &str) -> Vec<Contact> {
    let needle = text.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.matches(&needle))
        .cloned()
        .collect()
}
