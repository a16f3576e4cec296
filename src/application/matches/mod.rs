//! Match listing and unmatching

pub mod service;

pub use service::{MatchService, MatchSummary};
