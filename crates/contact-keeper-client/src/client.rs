//! Contacts API client trait

use crate::error::ApiResult;
use crate::forms::{LoginForm, RegisterForm};
use crate::types::{Contact, ContactDraft, TokenResponse, UserProfile};
use async_trait::async_trait;

/// Endpoint paths, relative to the API base URL
pub mod endpoints {
    /// Session check (GET) and login (POST)
    pub const AUTH: &str = "/api/auth";
    /// Account creation (POST)
    pub const USERS: &str = "/api/users";
    /// Contact collection (GET, POST)
    pub const CONTACTS: &str = "/api/contacts";

    /// Single contact (PUT, DELETE)
    pub fn contact(id: &str) -> String {
        format!("{}/{}", CONTACTS, id)
    }
}

/// Contacts API client trait
///
/// Defines the interface the store uses to reach the backend.
/// The session token is passed explicitly with each call; `None` sends the
/// request unauthenticated and lets the server reject it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// tasks the store spawns for each request.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// `GET /api/auth` - resolve the token to its user
    async fn current_user(&self, token: Option<&str>) -> ApiResult<UserProfile>;

    /// `POST /api/users` - create an account, returns a fresh token
    async fn register(&self, form: &RegisterForm) -> ApiResult<TokenResponse>;

    /// `POST /api/auth` - exchange credentials for a token
    async fn login(&self, form: &LoginForm) -> ApiResult<TokenResponse>;

    /// `GET /api/contacts` - the full collection of the token's user
    async fn list_contacts(&self, token: Option<&str>) -> ApiResult<Vec<Contact>>;

    /// `POST /api/contacts` - store a new contact, returns it with its id
    async fn create_contact(&self, token: Option<&str>, draft: &ContactDraft)
        -> ApiResult<Contact>;

    /// `PUT /api/contacts/:id` - replace a stored contact
    async fn update_contact(&self, token: Option<&str>, contact: &Contact) -> ApiResult<Contact>;

    /// `DELETE /api/contacts/:id`
    async fn delete_contact(&self, token: Option<&str>, id: &str) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::endpoints;

    #[test]
    fn test_contact_endpoint() {
        assert_eq!(endpoints::contact("123"), "/api/contacts/123");
    }
}
