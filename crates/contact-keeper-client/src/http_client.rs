//! HTTP implementation of [`ContactsApi`] using reqwest

use crate::client::{endpoints, ContactsApi};
use crate::error::{ApiError, ApiResult};
use crate::forms::{LoginForm, RegisterForm};
use crate::types::{Contact, ContactDraft, TokenResponse, UserProfile};
use async_trait::async_trait;
use contact_keeper_config::{AppConfig, AuthHeader};
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const X_AUTH_TOKEN: &str = "x-auth-token";

/// Contacts API client talking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth_header: AuthHeader,
}

impl HttpClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:5000`
    /// * `timeout` - Per-request timeout
    /// * `auth_header` - How the token is attached to requests
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        auth_header: AuthHeader,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        Self::new(
            config.api_base_url.clone(),
            config.request_timeout(),
            config.auth_header,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the token when present
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match (token, self.auth_header) {
            (Some(token), AuthHeader::Bearer) => builder.bearer_auth(token),
            (Some(token), AuthHeader::XAuthToken) => builder.header(X_AUTH_TOKEN, token),
            (None, _) => builder,
        }
    }

    /// Send a request and turn non-2xx responses into [`ApiError::Status`]
    async fn send(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response_body(status.as_u16(), &body);
        debug!("HttpClient: {}", err);
        Err(err)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContactsApi for HttpClient {
    async fn current_user(&self, token: Option<&str>) -> ApiResult<UserProfile> {
        let response = Self::send(self.request(Method::GET, endpoints::AUTH, token)).await?;
        Self::read_json(response).await
    }

    async fn register(&self, form: &RegisterForm) -> ApiResult<TokenResponse> {
        let builder = self.request(Method::POST, endpoints::USERS, None).json(form);
        Self::read_json(Self::send(builder).await?).await
    }

    async fn login(&self, form: &LoginForm) -> ApiResult<TokenResponse> {
        let builder = self.request(Method::POST, endpoints::AUTH, None).json(form);
        Self::read_json(Self::send(builder).await?).await
    }

    async fn list_contacts(&self, token: Option<&str>) -> ApiResult<Vec<Contact>> {
        let response = Self::send(self.request(Method::GET, endpoints::CONTACTS, token)).await?;
        Self::read_json(response).await
    }

    async fn create_contact(
        &self,
        token: Option<&str>,
        draft: &ContactDraft,
    ) -> ApiResult<Contact> {
        let builder = self
            .request(Method::POST, endpoints::CONTACTS, token)
            .json(draft);
        Self::read_json(Self::send(builder).await?).await
    }

    async fn update_contact(&self, token: Option<&str>, contact: &Contact) -> ApiResult<Contact> {
        let builder = self
            .request(Method::PUT, &endpoints::contact(&contact.id), token)
            .json(contact);
        Self::read_json(Self::send(builder).await?).await
    }

    async fn delete_contact(&self, token: Option<&str>, id: &str) -> ApiResult<()> {
        Self::send(self.request(Method::DELETE, &endpoints::contact(id), token)).await?;
        Ok(())
    }
}
