//! Contact Middleware
//!
//! Performs the contact CRUD requests against the API. The collection is
//! only mutated once the server has confirmed the change: each request
//! dispatches either its result action or `ContactError`, never both.

use crate::actions::{Action, ContactAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::tasks::{TaskRuntime, TaskSet};
use crate::middleware::Middleware;
use crate::state::AppState;
use contact_keeper_client::{ApiResult, ContactsApi};
use contact_keeper_config::{KeyValueStore, TOKEN_KEY};
use std::future::Future;
use std::sync::Arc;

/// Middleware for contact requests
pub struct ContactMiddleware {
    api: Arc<dyn ContactsApi>,
    storage: Arc<dyn KeyValueStore>,
    tasks: TaskSet,
}

impl ContactMiddleware {
    pub fn new(
        api: Arc<dyn ContactsApi>,
        storage: Arc<dyn KeyValueStore>,
        runtime: TaskRuntime,
    ) -> Self {
        Self {
            api,
            storage,
            tasks: TaskSet::new(runtime),
        }
    }

    /// Run one request and dispatch its outcome
    ///
    /// `request` receives the API and the token read from storage right now.
    fn spawn_request<T, F, Fut>(
        &mut self,
        dispatcher: &Dispatcher,
        operation: &'static str,
        request: F,
        on_success: impl FnOnce(T) -> ContactAction + Send + 'static,
    ) where
        T: Send + 'static,
        F: FnOnce(Arc<dyn ContactsApi>, Option<String>) -> Fut,
        Fut: Future<Output = ApiResult<T>> + Send + 'static,
    {
        let token = self.storage.get(TOKEN_KEY);
        let future = request(Arc::clone(&self.api), token);
        let dispatcher = dispatcher.clone();

        self.tasks.spawn(async move {
            match future.await {
                Ok(value) => dispatcher.dispatch(on_success(value)),
                Err(e) => {
                    log::warn!("ContactMiddleware: {} failed: {}", operation, e);
                    let fallback = format!("Failed to {}", operation);
                    dispatcher.dispatch(ContactAction::ContactError(e.message_or(&fallback)));
                }
            }
        });
    }
}

impl Middleware for ContactMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Contact(action) = action else {
            return true;
        };

        match action {
            ContactAction::FetchContacts => {
                self.spawn_request(
                    dispatcher,
                    "load contacts",
                    |api, token| async move { api.list_contacts(token.as_deref()).await },
                    ContactAction::GetContacts,
                );
            }
            ContactAction::CreateContact(draft) => {
                let draft = draft.clone();
                self.spawn_request(
                    dispatcher,
                    "add contact",
                    |api, token| async move { api.create_contact(token.as_deref(), &draft).await },
                    ContactAction::AddContact,
                );
            }
            ContactAction::SaveContact(contact) => {
                let contact = contact.clone();
                self.spawn_request(
                    dispatcher,
                    "update contact",
                    |api, token| async move {
                        api.update_contact(token.as_deref(), &contact).await
                    },
                    ContactAction::UpdateContact,
                );
            }
            ContactAction::DestroyContact(id) => {
                let id = id.clone();
                let deleted = id.clone();
                self.spawn_request(
                    dispatcher,
                    "delete contact",
                    |api, token| async move { api.delete_contact(token.as_deref(), &id).await },
                    move |()| ContactAction::DeleteContact(deleted),
                );
            }
            _ => return true,
        }

        false
    }

    fn in_flight(&mut self) -> usize {
        self.tasks.in_flight()
    }

    fn teardown(&mut self) {
        self.tasks.abort_all();
    }
}
