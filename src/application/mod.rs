//! Application layer: use cases orchestrating the domain ports
//!
//! - `swipe`: swipe recording and match formation
//! - `discovery`: recommendation feed and discovery preferences
//! - `matches`: match listing and unmatching
//! - `interests`: interest catalogue

pub mod discovery;
pub mod interests;
pub mod matches;
pub mod swipe;

pub use discovery::{DiscoveryFilters, DiscoveryPage, DiscoveryService, DiscoverySettings};
pub use interests::InterestService;
pub use matches::{MatchService, MatchSummary};
pub use swipe::{SwipeOutcome, SwipeService};
