//! Interests module: the interest catalogue

pub mod handlers;

pub use handlers::*;
