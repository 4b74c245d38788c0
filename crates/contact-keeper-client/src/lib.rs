//! Contacts REST API client
//!
//! This crate provides a trait-based client for the contacts backend.
//! The store only ever talks to the [`ContactsApi`] trait, so the HTTP
//! implementation can be swapped for a fake in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             ContactsApi trait               │
//! │  - current_user() / register() / login()    │
//! │  - list/create/update/delete contacts       │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!             ┌─────────────────────┐
//!             │     HttpClient      │
//!             │  (reqwest, JSON)    │
//!             └─────────────────────┘
//! ```
//!
//! Every call takes the session token as an explicit argument; the client
//! keeps no per-session header state.
//!
//! # Example
//!
//! ```rust,no_run
//! use contact_keeper_client::{ContactsApi, HttpClient, LoginForm};
//! use contact_keeper_config::AppConfig;
//!
//! # async fn example() -> Result<(), contact_keeper_client::ApiError> {
//! let client = HttpClient::from_config(&AppConfig::default())?;
//! let form = LoginForm::new("jane@example.com", "hunter22");
//! let token = client.login(&form).await?.token;
//! let contacts = client.list_contacts(Some(&token)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod forms;
pub mod http_client;
pub mod types;

pub use client::{endpoints, ContactsApi};
pub use error::{ApiError, ApiResult};
pub use forms::{FormError, LoginForm, RegisterForm};
pub use http_client::HttpClient;
pub use types::{Contact, ContactDraft, ContactId, ContactKind, TokenResponse, UserProfile};
