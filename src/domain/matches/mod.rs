//! Match aggregate

pub mod model;
pub mod repository;

pub use model::{CanonicalPair, Match};
pub use repository::MatchRepository;
