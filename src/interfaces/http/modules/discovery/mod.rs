//! Discovery module: ranked candidate feed and discovery preferences

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
