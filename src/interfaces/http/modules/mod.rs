//! HTTP resource modules (DTOs + handlers per resource)

pub mod discovery;
pub mod health;
pub mod interests;
pub mod matches;
pub mod metrics;
pub mod request_id;
pub mod swipes;
