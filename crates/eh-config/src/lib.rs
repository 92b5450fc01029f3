//! Configuration and persistence for eh-core
//!
//! This crate provides:
//! - File path utilities for config, cache and data files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - The `Persistence` collaborator with in-memory and JSON file stores

pub mod app_config;
pub mod config_file;
pub mod json_store;
pub mod memory_store;
pub mod paths;
pub mod persistence;

pub use app_config::AppConfig;
pub use config_file::{load_app_config_from, parse_app_config};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use paths::{cache_dir, config_dir, data_dir};
pub use persistence::{Persistence, PersistenceError};
