//! Infrastructure layer - External systems integration
//!
//! Database session handling and the repositories built on it.

mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
