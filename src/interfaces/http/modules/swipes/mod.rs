//! Swipes module: recording swipes and swipe statistics

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
