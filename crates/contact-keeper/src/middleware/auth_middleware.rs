//! Auth Middleware
//!
//! Performs the session requests:
//! - `LoadUser` → `GET /api/auth` → `UserLoaded` or `AuthError`
//! - `Register` → `POST /api/users` → `RegisterSuccess` or `RegisterFail`
//! - `Login` → `POST /api/auth` → `LoginSuccess` or `LoginFail`
//!
//! Each request runs on its own task and dispatches exactly one result
//! action. Overlapping requests are not sequenced; whichever completes last
//! determines the final state.

use crate::actions::{Action, AuthAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::tasks::{TaskRuntime, TaskSet};
use crate::middleware::Middleware;
use crate::state::AppState;
use contact_keeper_client::{ContactsApi, LoginForm, RegisterForm};
use contact_keeper_config::{KeyValueStore, TOKEN_KEY};
use std::sync::Arc;

const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";

/// Middleware for session requests
pub struct AuthMiddleware {
    api: Arc<dyn ContactsApi>,
    storage: Arc<dyn KeyValueStore>,
    tasks: TaskSet,
}

impl AuthMiddleware {
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

    fn load_user(&mut self, dispatcher: &Dispatcher) {
        let api = Arc::clone(&self.api);
        // Storage is the source of truth for the token
        let token = self.storage.get(TOKEN_KEY);
        let dispatcher = dispatcher.clone();

        self.tasks.spawn(async move {
            match api.current_user(token.as_deref()).await {
                Ok(user) => {
                    log::info!("AuthMiddleware: session restored for {}", user.email);
                    dispatcher.dispatch(AuthAction::UserLoaded(user));
                }
                Err(e) if e.status() == Some(401) => {
                    log::info!("AuthMiddleware: no valid session: {}", e);
                    dispatcher.dispatch(AuthAction::AuthError);
                }
                Err(e) => {
                    log::warn!("AuthMiddleware: session check failed: {}", e);
                    dispatcher.dispatch(AuthAction::AuthError);
                }
            }
        });
    }

    fn register(&mut self, form: &RegisterForm, dispatcher: &Dispatcher) {
        let api = Arc::clone(&self.api);
        let form = form.clone();
        let dispatcher = dispatcher.clone();

        self.tasks.spawn(async move {
            match api.register(&form).await {
                Ok(response) => {
                    log::info!("AuthMiddleware: registered {}", form.email);
                    dispatcher.dispatch(AuthAction::RegisterSuccess {
                        token: response.token,
                    });
                }
                Err(e) => {
                    log::warn!("AuthMiddleware: registration failed: {}", e);
                    dispatcher.dispatch(AuthAction::RegisterFail(e.message_or(REGISTER_FAILED)));
                }
            }
        });
    }

    fn login(&mut self, form: &LoginForm, dispatcher: &Dispatcher) {
        let api = Arc::clone(&self.api);
        let form = form.clone();
        let dispatcher = dispatcher.clone();

        self.tasks.spawn(async move {
            match api.login(&form).await {
                Ok(response) => {
                    log::info!("AuthMiddleware: logged in as {}", form.email);
                    dispatcher.dispatch(AuthAction::LoginSuccess {
                        token: response.token,
                    });
                }
                Err(e) => {
                    log::warn!("AuthMiddleware: login failed: {}", e);
                    dispatcher.dispatch(AuthAction::LoginFail(e.message_or(LOGIN_FAILED)));
                }
            }
        });
    }
}

impl Middleware for AuthMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Auth(AuthAction::LoadUser) => {
                self.load_user(dispatcher);
                false
            }
            Action::Auth(AuthAction::Register(form)) => {
                self.register(form, dispatcher);
                false
            }
            Action::Auth(AuthAction::Login(form)) => {
                self.login(form, dispatcher);
                false
            }
            _ => true,
        }
    }

    fn in_flight(&mut self) -> usize {
        self.tasks.in_flight()
    }

    fn teardown(&mut self) {
        self.tasks.abort_all();
    }
}
