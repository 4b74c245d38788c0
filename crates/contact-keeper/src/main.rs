//! Headless contact-keeper client
//!
//! Restores the stored session (or logs in with `CONTACT_KEEPER_EMAIL` and
//! `CONTACT_KEEPER_PASSWORD`), then lists the user's contacts. An optional
//! first argument filters the list by name or email.

use anyhow::{Context, Result};
use contact_keeper::Store;
use contact_keeper_client::{HttpClient, LoginForm};
use contact_keeper_config::{AppConfig, FileStore};
use std::sync::Arc;

const EMAIL_ENV: &str = "CONTACT_KEEPER_EMAIL";
const PASSWORD_ENV: &str = "CONTACT_KEEPER_PASSWORD";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting contact-keeper");

    let config = AppConfig::load();
    let storage = FileStore::open_default().context("Failed to open session storage")?;
    log::debug!("Session storage: {}", storage.path().display());
    let api = HttpClient::from_config(&config).context("Failed to create HTTP client")?;
    log::info!("API: {}", api.base_url());

    let mut store = Store::with_services(Arc::new(api), Arc::new(storage), &config)?;

    store.load_user();
    store.settle().await;

    if !store.state().auth.is_logged_in() {
        if let (Ok(email), Ok(password)) = (std::env::var(EMAIL_ENV), std::env::var(PASSWORD_ENV))
        {
            let form = LoginForm::new(email, password);
            match form.validate() {
                Ok(()) => {
                    store.login(form);
                    store.settle().await;
                    store.load_user();
                    store.settle().await;
                }
                Err(e) => log::error!("Login skipped: {}", e),
            }
        }
    }

    let auth = &store.state().auth;
    if let Some(error) = &auth.error {
        log::error!("Authentication failed: {}", error);
    }
    let Some(user) = auth.user.clone().filter(|_| auth.is_logged_in()) else {
        log::warn!(
            "Not logged in. Set {} and {} to log in.",
            EMAIL_ENV,
            PASSWORD_ENV
        );
        store.teardown();
        return Ok(());
    };
    log::info!("Logged in as {} <{}>", user.name, user.email);

    store.get_contacts();
    store.settle().await;

    if let Some(text) = std::env::args().nth(1) {
        store.filter_contacts(text);
    }

    let contacts = &store.state().contacts;
    if let Some(error) = &contacts.error {
        log::error!("Failed to load contacts: {}", error);
    }
    for contact in contacts.visible() {
        println!(
            "{:<24} {:<32} {:<16} {}",
            contact.name, contact.email, contact.phone, contact.kind
        );
    }
    log::info!("{} contacts shown", contacts.visible().len());

    store.teardown();
    log::info!("Exiting contact-keeper");
    Ok(())
}
