//! Configuration and durable storage for contact-keeper
//!
//! This crate provides:
//! - File path utilities for config and storage files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Key-value storage used to persist the session token

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod storage;

pub use app_config::{AppConfig, AuthHeader};
pub use config_file::{config_file_candidates, load_config_file, CONFIG_FILE};
pub use paths::{config_dir, storage_path};
pub use storage::{FileStore, KeyValueStore, MemoryStore, TOKEN_KEY};
