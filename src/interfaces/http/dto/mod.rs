//! DTOs shared by several resource modules

pub mod profile;

pub use profile::*;
