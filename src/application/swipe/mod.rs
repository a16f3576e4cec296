//! Match formation: swipes and the matches they complete

pub mod service;

pub use service::{SwipeOutcome, SwipeService};
