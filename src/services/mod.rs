//! Services layer - Application use cases.

mod user_lookup;

pub use user_lookup::UserLookup;
