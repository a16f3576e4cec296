//! User aggregate
//!
//! Contains the UserProfile entity, candidate filter and repository interface.

pub mod model;
pub mod repository;

pub use model::{
    CandidateFilter, DiscoveryPreferences, Gender, GenderPreference, PreferencesUpdate,
    UserProfile,
};
pub use repository::UserRepository;
