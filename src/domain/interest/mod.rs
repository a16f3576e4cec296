//! Interest catalogue

pub mod model;
pub mod repository;

pub use model::Interest;
pub use repository::InterestRepository;
