//! Database entities module

pub mod interest;
pub mod swipe;
pub mod user;
pub mod user_interest;
pub mod user_match;

pub use interest::Entity as Interest;
pub use swipe::Entity as Swipe;
pub use user::Entity as User;
pub use user_interest::Entity as UserInterest;
pub use user_match::Entity as UserMatch;
