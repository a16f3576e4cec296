//! Swipe aggregate

pub mod model;
pub mod repository;

pub use model::{Swipe, SwipeAction, SwipeStats};
pub use repository::{SwipeRepository, SwipeUnitOfWork};
