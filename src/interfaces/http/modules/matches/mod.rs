//! Matches module: listing, viewing and removing matches

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
