//! # Campus Match
//!
//! Swipe, match and discovery service for a campus dating app.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: entities, value types and repository ports
//! - **application**: use cases (swipe recording, discovery, matches, interests)
//! - **infrastructure**: SeaORM persistence, migrations and token verification
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: error types and pagination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, resolve_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::{create_api_router, AppState};
