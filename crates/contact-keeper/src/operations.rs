//! Store operations
//!
//! The public surface of the three stores. Request operations (`load_user`,
//! `register`, `login` and the contact CRUD calls) return immediately; their
//! result is applied once the owner drives the store with
//! [`Store::settle`] or [`Store::process_next`]. All other operations are
//! applied before they return.

use crate::actions::{AlertAction, AuthAction, ContactAction};
use crate::state::{AlertId, AlertKind};
use crate::store::Store;
use contact_keeper_client::{Contact, ContactDraft, ContactId, LoginForm, RegisterForm};
use std::time::Duration;

/// Session operations
impl Store {
    /// Resolve the stored token to its user
    pub fn load_user(&mut self) {
        self.dispatch(AuthAction::LoadUser);
    }

    /// Create an account. Call [`load_user`](Store::load_user) afterwards
    /// to populate the user.
    pub fn register(&mut self, form: RegisterForm) {
        self.dispatch(AuthAction::Register(form));
    }

    /// Log in. Call [`load_user`](Store::load_user) afterwards to populate
    /// the user.
    pub fn login(&mut self, form: LoginForm) {
        self.dispatch(AuthAction::Login(form));
    }

    pub fn logout(&mut self) {
        self.dispatch(AuthAction::Logout);
    }

    pub fn clear_errors(&mut self) {
        self.dispatch(AuthAction::ClearErrors);
    }
}

/// Contact operations
impl Store {
    pub fn get_contacts(&mut self) {
        self.dispatch(ContactAction::FetchContacts);
    }

    pub fn add_contact(&mut self, draft: ContactDraft) {
        self.dispatch(ContactAction::CreateContact(draft));
    }

    pub fn update_contact(&mut self, contact: Contact) {
        self.dispatch(ContactAction::SaveContact(contact));
    }

    pub fn delete_contact(&mut self, id: impl Into<ContactId>) {
        self.dispatch(ContactAction::DestroyContact(id.into()));
    }

    /// Select a contact for editing
    pub fn set_current(&mut self, contact: Contact) {
        self.dispatch(ContactAction::SetCurrent(contact));
    }

    pub fn clear_current(&mut self) {
        self.dispatch(ContactAction::ClearCurrent);
    }

    /// Show only contacts whose name or email contains `text`, ignoring case
    pub fn filter_contacts(&mut self, text: impl Into<String>) {
        self.dispatch(ContactAction::FilterContacts(text.into()));
    }

    pub fn clear_filter(&mut self) {
        self.dispatch(ContactAction::ClearFilter);
    }

    /// Forget all contact data, e.g. after logout
    pub fn clear_contacts(&mut self) {
        self.dispatch(ContactAction::ClearContacts);
    }
}

/// Alert operations
impl Store {
    /// Show an alert for the configured default timeout
    pub fn set_alert(&mut self, message: impl Into<String>, kind: impl Into<AlertKind>) {
        self.dispatch(AlertAction::raise(message, kind, None));
    }

    /// Show an alert for `timeout`
    pub fn set_alert_for(
        &mut self,
        message: impl Into<String>,
        kind: impl Into<AlertKind>,
        timeout: Duration,
    ) {
        self.dispatch(AlertAction::raise(message, kind, Some(timeout)));
    }

    /// Dismiss an alert before it expires
    pub fn remove_alert(&mut self, id: AlertId) {
        self.dispatch(AlertAction::RemoveAlert(id));
    }
}
