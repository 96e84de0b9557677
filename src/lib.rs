//! # Boruto Heroes Server
//!
//! Read-only REST API over a fixed catalog of heroes, with paged listing and
//! case-insensitive name search.
//!
//! ## Architecture
//!
//! - **domain**: Hero entity, catalog repository trait, pagination errors
//! - **application**: Pagination and search services
//! - **infrastructure**: In-memory catalog and its seed data
//! - **interfaces**: HTTP handlers, response envelope, router
//! - **shared**: Page type, parameter validation, shutdown signal
//! - **server**: Runtime lifecycle used by the CLI binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export API router
pub use interfaces::http::create_api_router;
