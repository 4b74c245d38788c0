//! Shared fixtures for unit tests

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::TaskRuntime;
use async_trait::async_trait;
use contact_keeper_client::{
    ApiError, ApiResult, Contact, ContactDraft, ContactsApi, LoginForm, RegisterForm,
    TokenResponse, UserProfile,
};
use contact_keeper_config::{KeyValueStore, MemoryStore, TOKEN_KEY};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const LOGIN_TOKEN: &str = "login-token";
pub const REGISTER_TOKEN: &str = "register-token";

pub fn user() -> UserProfile {
    UserProfile {
        id: "42".to_string(),
        name: "Test User".to_string(),
        email: "test@test.com".to_string(),
        date: None,
    }
}

pub fn contact(id: &str, name: &str) -> Contact {
    ContactDraft::new(name, format!("{}@example.com", name.to_lowercase())).with_id(id)
}

pub fn dispatcher() -> (Dispatcher, UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Dispatcher::new(tx), rx)
}

/// The test's own runtime; call from within a Tokio test
pub fn runtime() -> TaskRuntime {
    TaskRuntime::from_handle(tokio::runtime::Handle::current())
}

#[derive(Default)]
struct FakeState {
    contacts: Vec<Contact>,
    next_id: usize,
    calls: Vec<(&'static str, Option<String>)>,
    delays: HashMap<&'static str, Duration>,
    current_user_error: Option<ApiError>,
    login_error: Option<ApiError>,
    register_error: Option<ApiError>,
    contacts_error: Option<ApiError>,
}

/// Scriptable in-memory [`ContactsApi`]
///
/// Session checks succeed for any token and fail with 401 without one.
/// Created contacts get ids `srv-1`, `srv-2`, ...
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn seed_contacts(&self, contacts: Vec<Contact>) {
        self.with_state(|state| state.contacts = contacts);
    }

    pub fn stored_contacts(&self) -> Vec<Contact> {
        self.with_state(|state| state.contacts.clone())
    }

    /// Delay every call of `operation` by `delay`
    pub fn delay(&self, operation: &'static str, delay: Duration) {
        self.with_state(|state| {
            state.delays.insert(operation, delay);
        });
    }

    pub fn fail_current_user(&self, error: ApiError) {
        self.with_state(|state| state.current_user_error = Some(error));
    }

    pub fn fail_login(&self, error: ApiError) {
        self.with_state(|state| state.login_error = Some(error));
    }

    pub fn fail_register(&self, error: ApiError) {
        self.with_state(|state| state.register_error = Some(error));
    }

    /// Fail every contact request
    pub fn fail_contacts(&self, error: ApiError) {
        self.with_state(|state| state.contacts_error = Some(error));
    }

    pub fn calls(&self) -> Vec<(&'static str, Option<String>)> {
        self.with_state(|state| state.calls.clone())
    }

    /// Tokens passed to each call of `operation`
    pub fn tokens(&self, operation: &str) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter(|(op, _)| *op == operation)
            .map(|(_, token)| token)
            .collect()
    }

    /// Record the call, then wait for the configured delay
    async fn enter(&self, operation: &'static str, token: Option<&str>) {
        let delay = self.with_state(|state| {
            state.calls.push((operation, token.map(str::to_string)));
            state.delays.get(operation).copied()
        });
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn contacts_error(&self) -> Option<ApiError> {
        self.with_state(|state| state.contacts_error.clone())
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        msg: Some("Contact not found".to_string()),
    }
}

#[async_trait]
impl ContactsApi for FakeApi {
    async fn current_user(&self, token: Option<&str>) -> ApiResult<UserProfile> {
        self.enter("current_user", token).await;
        if let Some(error) = self.with_state(|state| state.current_user_error.clone()) {
            return Err(error);
        }
        match token {
            Some(_) => Ok(user()),
            None => Err(ApiError::Status {
                status: 401,
                msg: Some("No token, authorization denied".to_string()),
            }),
        }
    }

    async fn register(&self, _form: &RegisterForm) -> ApiResult<TokenResponse> {
        self.enter("register", None).await;
        match self.with_state(|state| state.register_error.clone()) {
            Some(error) => Err(error),
            None => Ok(TokenResponse {
                token: REGISTER_TOKEN.to_string(),
            }),
        }
    }

    async fn login(&self, _form: &LoginForm) -> ApiResult<TokenResponse> {
        self.enter("login", None).await;
        match self.with_state(|state| state.login_error.clone()) {
            Some(error) => Err(error),
            None => Ok(TokenResponse {
                token: LOGIN_TOKEN.to_string(),
            }),
        }
    }

    async fn list_contacts(&self, token: Option<&str>) -> ApiResult<Vec<Contact>> {
        self.enter("list_contacts", token).await;
        if let Some(error) = self.contacts_error() {
            return Err(error);
        }
        Ok(self.stored_contacts())
    }

    async fn create_contact(
        &self,
        token: Option<&str>,
        draft: &ContactDraft,
    ) -> ApiResult<Contact> {
        self.enter("create_contact", token).await;
        if let Some(error) = self.contacts_error() {
            return Err(error);
        }
        Ok(self.with_state(|state| {
            state.next_id += 1;
            let contact = draft.clone().with_id(format!("srv-{}", state.next_id));
            state.contacts.push(contact.clone());
            contact
        }))
    }

    async fn update_contact(&self, token: Option<&str>, contact: &Contact) -> ApiResult<Contact> {
        self.enter("update_contact", token).await;
        if let Some(error) = self.contacts_error() {
            return Err(error);
        }
        self.with_state(|state| -> ApiResult<Contact> {
            let stored = state
                .contacts
                .iter_mut()
                .find(|stored| stored.id == contact.id)
                .ok_or_else(not_found)?;
            *stored = contact.clone();
            Ok(contact.clone())
        })
    }

    async fn delete_contact(&self, token: Option<&str>, id: &str) -> ApiResult<()> {
        self.enter("delete_contact", token).await;
        if let Some(error) = self.contacts_error() {
            return Err(error);
        }
        self.with_state(|state| -> ApiResult<()> {
            let index = state
                .contacts
                .iter()
                .position(|stored| stored.id == id)
                .ok_or_else(not_found)?;
            state.contacts.remove(index);
            Ok(())
        })
    }
}

/// [`MemoryStore`] that counts mutations
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    removes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            inner: MemoryStore::with_entry(TOKEN_KEY, token),
            ..Self::default()
        }
    }

    /// Number of `set` calls
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `remove` calls
    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }
}
