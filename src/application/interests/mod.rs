pub mod service;

pub use service::InterestService;
