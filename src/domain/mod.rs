//! Domain layer - entities read by the lookup.

mod user;

pub use user::User;
