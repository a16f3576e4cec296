//! Discovery feed: candidate filtering, fallback relaxation and scoring

pub mod scoring;
pub mod service;

pub use service::{
    DiscoveryFilters, DiscoveryPage, DiscoveryService, DiscoverySettings, ScoredProfile,
};
